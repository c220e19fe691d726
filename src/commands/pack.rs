use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use fs_err as fs;
use panepack::{PackOutput, Packer};

use crate::data::{ItemList, Layout, Project};
use crate::options::PackOptions;
use crate::summary::Summary;

pub fn pack(options: PackOptions) -> anyhow::Result<()> {
    let (project, item_list, output) =
        pack_project(options.project_path.as_deref(), options.page_size)?;

    let layout = Layout::new(project.name.as_deref(), &output, &item_list);

    match options.output {
        Some(output_path) => {
            if let Some(output_folder) = output_path.parent() {
                fs::create_dir_all(output_folder)?;
            }

            let mut file = BufWriter::new(fs::File::create(&output_path)?);
            serde_json::to_writer_pretty(&mut file, &layout)?;
            file.flush()?;

            log::info!("Wrote layout to {}", output_path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write!(handle, "{}", Summary(&layout))?;
        }
    }

    Ok(())
}

/// Reads a project and packs its items, shared by every command that needs a
/// layout.
pub(crate) fn pack_project(
    project_path: Option<&Path>,
    page_size: Option<(u32, u32)>,
) -> anyhow::Result<(Project, ItemList, PackOutput)> {
    let project = match Project::discover(project_path) {
        Ok(project) => project,
        Err(err) if err.is_not_found() => {
            return Err(err).context("no panecut.toml found, pass the path to a project");
        }
        Err(err) => return Err(err.into()),
    };
    let page_size = project.page_size(page_size)?;
    let item_list = project.item_list()?;

    log::info!(
        "Packing {} items from {} onto {}x{} pages",
        item_list.items().len(),
        project.file_path.display(),
        page_size.0,
        page_size.1
    );

    let output = Packer::new(page_size)
        .pack(item_list.items())
        .with_context(|| format!("couldn't pack {}", project.file_path.display()))?;

    log::info!(
        "Placed {} items on {} pages",
        output.placed_count(),
        output.pages().len()
    );

    Ok((project, item_list, output))
}
