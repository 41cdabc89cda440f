//! Export helpers for JSON design artifacts and CSV stats reports.

pub mod design {
    use std::fs::{self, File};
    use std::io;
    use std::path::{Path, PathBuf};

    use chrono::Utc;
    use habitat_model::Habitat;
    use serde_json::to_writer_pretty;

    /// File name for a design exported at the given UNIX-millisecond
    /// timestamp.
    pub fn file_name(timestamp_millis: i64) -> String {
        format!("habitat-design-{timestamp_millis}.json")
    }

    /// Write the design into `dir`, named by the current wall-clock time.
    pub fn write_current(dir: &Path, habitat: &Habitat) -> io::Result<PathBuf> {
        write_at(dir, habitat, Utc::now().timestamp_millis())
    }

    /// Write the full ordered module list as pretty-printed UTF-8 JSON.
    ///
    /// Only the modules are serialized: no schema version, no compression,
    /// and no derived calculations, which are recomputed on import.
    pub fn write_at(dir: &Path, habitat: &Habitat, timestamp_millis: i64) -> io::Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(file_name(timestamp_millis));
        to_writer_pretty(File::create(&path)?, &habitat.modules)?;
        Ok(path)
    }
}

pub mod report {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use habitat_calc::ModuleCalculations;
    use habitat_model::Module;

    const HEADER: &str =
        "module_id,name,shape,material,volume_m3,surface_area_m2,mass_kg,crew_capacity,power_kw";

    /// Create a writer for the target path, handling stdout (`-`) by
    /// convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the standard stats CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// Write one per-module row, matching the standard header ordering.
    ///
    /// Ids and names are quoted when they would break the column layout.
    pub fn write_row(
        writer: &mut dyn Write,
        module: &Module,
        calc: &ModuleCalculations,
    ) -> io::Result<()> {
        writeln!(
            writer,
            "{},{},{},{},{:.2},{:.2},{:.2},{},{:.2}",
            quote_field(&module.id),
            quote_field(&module.name),
            module.shape_kind.name(),
            module.material.name(),
            calc.volume_m3,
            calc.surface_area_m2,
            calc.mass_kg,
            calc.crew_capacity,
            calc.power_requirement_kw,
        )
    }

    /// Write the aggregate row appended after the per-module rows.
    pub fn write_totals(writer: &mut dyn Write, totals: &ModuleCalculations) -> io::Result<()> {
        writeln!(
            writer,
            "TOTAL,,,,{:.2},{:.2},{:.2},{},{:.2}",
            totals.volume_m3,
            totals.surface_area_m2,
            totals.mass_kg,
            totals.crew_capacity,
            totals.power_requirement_kw,
        )
    }

    fn quote_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}
