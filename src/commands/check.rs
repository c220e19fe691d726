use anyhow::bail;

use crate::commands::pack::pack_project;
use crate::options::CheckOptions;

pub fn check(options: CheckOptions) -> anyhow::Result<()> {
    let (project, item_list, output) =
        pack_project(options.project_path.as_deref(), options.page_size)?;

    for unplaceable in output.unplaceable() {
        let item = unplaceable.item();
        let label = item_list
            .label(item.id())
            .map(ToString::to_string)
            .unwrap_or_default();

        eprintln!("{}: {}", label, unplaceable);
    }

    if !output.unplaceable().is_empty() {
        bail!(
            "{} of {} items in {} are larger than the page",
            output.unplaceable().len(),
            item_list.items().len(),
            project.file_path.display()
        );
    }

    println!(
        "All {} items fit, using {} pages",
        item_list.items().len(),
        output.pages().len()
    );

    Ok(())
}
