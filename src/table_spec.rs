use serde::Serialize;

pub const SINE_SIZE: usize = 512 + 1;
pub const CHEBY_TABLES: usize = 16;
pub const CHEBY_SIZE: usize = 512 + 1;
pub const FOLD_SIZE: usize = 1024 + 1;
pub const FOLD_MAX_SIZE: usize = (FOLD_SIZE - 1) / 2 + 1;
pub const TRIANGLE_SIZE: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shape {
    Scalar,
    Pair,
}

/// Storage type of the consuming engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Domain {
    /// Signed fixed point, 1 integer bit and 15 fractional bits.
    Q1_15,
    F32,
}

impl Domain {
    pub const fn type_name(self) -> &'static str {
        match self {
            Domain::Q1_15 => "s1_15",
            Domain::F32 => "f",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSpec {
    pub name: &'static str,
    /// 1 for flat tables.
    pub rows: usize,
    pub len: usize,
    pub shape: Shape,
    pub domain: Domain,
}

impl TableSpec {
    pub const fn element_count(&self) -> usize {
        self.rows * self.len
    }

    pub const fn is_grid(&self) -> bool {
        self.rows > 1
    }
}

pub const SINE: TableSpec = TableSpec {
    name: "sine",
    rows: 1,
    len: SINE_SIZE,
    shape: Shape::Pair,
    domain: Domain::Q1_15,
};

pub const CHEBY: TableSpec = TableSpec {
    name: "cheby",
    rows: CHEBY_TABLES,
    len: CHEBY_SIZE,
    shape: Shape::Scalar,
    domain: Domain::F32,
};

pub const FOLD: TableSpec = TableSpec {
    name: "fold",
    rows: 1,
    len: FOLD_SIZE,
    shape: Shape::Pair,
    domain: Domain::F32,
};

pub const FOLD_MAX: TableSpec = TableSpec {
    name: "fold_max",
    rows: 1,
    len: FOLD_MAX_SIZE,
    shape: Shape::Scalar,
    domain: Domain::F32,
};

pub const TRIANGLES: TableSpec = TableSpec {
    name: "triangles",
    rows: TRIANGLE_SIZE,
    len: TRIANGLE_SIZE,
    shape: Shape::Scalar,
    domain: Domain::F32,
};

pub const ALL: [TableSpec; 5] = [SINE, CHEBY, FOLD, FOLD_MAX, TRIANGLES];
