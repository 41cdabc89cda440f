use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use habitat_designer::calc::{compute_habitat_totals, compute_module_stats};
use habitat_designer::config::load_design;
use habitat_designer::export::{design, report};

/// Export a habitat design: timestamped JSON artifact and/or stats CSV.
#[derive(Parser, Debug)]
#[command(author, version, about = "Habitat design exporter")]
struct Cli {
    /// Design file (YAML/TOML/JSON) or directory of TOML module files
    #[arg(long)]
    design: PathBuf,

    /// Output directory for the JSON design artifact
    #[arg(long, default_value = "out")]
    out: PathBuf,

    /// Stats CSV path (use '-' for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Skip writing the JSON design artifact
    #[arg(long, default_value_t = false)]
    no_design: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let habitat = load_design(&cli.design)?;

    if !cli.no_design {
        let path = design::write_current(&cli.out, &habitat)?;
        println!("Design exported : {}", path.display());
    }

    if let Some(csv_path) = &cli.csv {
        let mut writer = report::writer_for_path(csv_path)?;
        report::write_header(writer.as_mut())?;
        for module in &habitat.modules {
            let calc = compute_module_stats(module);
            report::write_row(writer.as_mut(), module, &calc)?;
        }
        let totals = compute_habitat_totals(&habitat.modules);
        report::write_totals(writer.as_mut(), &totals)?;
        writer.flush()?;
        if csv_path != Path::new("-") {
            println!("Stats CSV       : {}", csv_path.display());
        }
    }

    Ok(())
}
