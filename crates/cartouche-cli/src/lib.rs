//! CLI logic for the Cartouche legend renderer.
//!
//! Loads a TOML legend description, builds the model items, and renders
//! them to the output format selected by the output file extension.

mod args;
mod config;
mod document;

pub use args::Args;

use std::{ffi::OsStr, fs, path::Path};

use log::info;

use cartouche::{Error, target::View, text::SystemShaper};

/// Run the Cartouche CLI application
///
/// Reads the input document, renders the legend, and writes the result to
/// the output file. The output extension selects the format: `.svg`,
/// `.pdf`, or `.txt` for a display-list dump.
///
/// # Errors
///
/// Returns [`Error`] for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document parsing errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), Error> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Rendering legend"
    );

    let defaults = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let doc: document::Document =
        toml::from_str(&source).map_err(|err| Error::Document(err.to_string()))?;
    let mut legend = document::build_legend(doc, &defaults)?;

    let shaper = SystemShaper::new();
    let output = Path::new(&args.output);
    match output.extension().and_then(OsStr::to_str) {
        Some("svg") => fs::write(output, legend.render_svg(&shaper))?,
        Some("pdf") => {
            let title = output
                .file_stem()
                .and_then(OsStr::to_str)
                .unwrap_or("legend");
            fs::write(output, legend.render_pdf(title, &shaper)?)?;
        }
        Some("txt") => {
            let list = legend.render_display(View::identity(), &shaper);
            fs::write(output, list.dump())?;
        }
        _ => {
            return Err(Error::Document(format!(
                "unsupported output extension in '{}' (expected .svg, .pdf, or .txt)",
                args.output
            )));
        }
    }

    info!(output_file = args.output; "Legend exported successfully");

    Ok(())
}
