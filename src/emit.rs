use std::io::{self, Write};

use ron::ser::PrettyConfig;
use serde::Deserialize;

use crate::config::Config;
use crate::error::Result;
use crate::table::{PairTable, Tables};
use crate::table_spec::{self, Shape, TableSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Literal data definitions for the engine's `DynamicData` struct.
    #[default]
    Cc,
    Ron,
    Json,
}

pub fn write_tables<W: Write>(tables: &Tables, config: &Config, w: &mut W) -> Result<()> {
    match config.format {
        Format::Cc => write_cc(tables, &config.header, config.precision, w)?,
        Format::Ron => {
            let pretty = PrettyConfig::new()
                .depth_limit(2)
                .indentor("  ".to_string());
            let s = ron::ser::to_string_pretty(tables, pretty)?;
            w.write_all(s.as_bytes())?;
            writeln!(w)?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *w, tables)?;
            writeln!(w)?;
        }
    }
    Ok(())
}

pub fn write_cc<W: Write>(
    tables: &Tables,
    header: &str,
    precision: usize,
    w: &mut W,
) -> io::Result<()> {
    writeln!(w, "#include \"{header}\"")?;
    writeln!(w)?;

    write_pairs(w, &table_spec::SINE, &tables.sine, precision)?;
    write_rows(w, &table_spec::CHEBY, &tables.cheby, precision)?;
    write_pairs(w, &table_spec::FOLD, &tables.fold, precision)?;
    write_scalars(w, &table_spec::FOLD_MAX, &tables.fold_max, precision)?;
    write_rows(w, &table_spec::TRIANGLES, &tables.triangles, precision)?;
    Ok(())
}

/// Declared type, e.g. `Buffer<std::pair<s1_15, s1_15>, 513>`.
pub fn cc_type(spec: &TableSpec) -> String {
    let t = spec.domain.type_name();
    let element = match spec.shape {
        Shape::Scalar => t.to_string(),
        Shape::Pair => format!("std::pair<{t}, {t}>"),
    };
    if spec.is_grid() {
        format!("Buffer<Buffer<{element}, {}>, {}>", spec.len, spec.rows)
    } else {
        format!("Buffer<{element}, {}>", spec.len)
    }
}

fn open<W: Write>(w: &mut W, spec: &TableSpec) -> io::Result<()> {
    writeln!(w, "const {} DynamicData::{} = {{{{{{", cc_type(spec), spec.name)
}

fn close<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "}}}}}};")?;
    writeln!(w)
}

fn literal(spec: &TableSpec, x: f64, precision: usize) -> String {
    format!("{:.*}_{}", precision, x, spec.domain.type_name())
}

fn write_pairs<W: Write>(
    w: &mut W,
    spec: &TableSpec,
    table: &PairTable,
    precision: usize,
) -> io::Result<()> {
    open(w, spec)?;
    for p in table.pairs() {
        writeln!(
            w,
            "    {{ {}, {} }},",
            literal(spec, p.value, precision),
            literal(spec, p.delta, precision)
        )?;
    }
    close(w)
}

fn write_rows<W: Write>(
    w: &mut W,
    spec: &TableSpec,
    rows: &[Vec<f32>],
    precision: usize,
) -> io::Result<()> {
    open(w, spec)?;
    for row in rows {
        let cells = row
            .iter()
            .map(|&x| literal(spec, f64::from(x), precision))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(w, "    {{ {cells} }},")?;
    }
    close(w)
}

fn write_scalars<W: Write>(
    w: &mut W,
    spec: &TableSpec,
    values: &[f64],
    precision: usize,
) -> io::Result<()> {
    open(w, spec)?;
    for &x in values {
        writeln!(w, "    {},", literal(spec, x, precision))?;
    }
    close(w)
}
