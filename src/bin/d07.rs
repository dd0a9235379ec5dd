use anyhow::{Context, Result};
use lib::cli::{Opts, Report};
use lib::fs;
use lib::input::Input;

/// Directories at most this large are deletion candidates.
const SMALL_DIR_LIMIT: u64 = 100000;
/// Total disk capacity.
const CAPACITY: u64 = 70000000;
/// Free space required by the update.
const REQUIRED: u64 = 30000000;

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let path = opts.input("inputs/d07.txt");
    let input = Input::load(path)?;

    let tree = fs::build(input.lines()).with_context(|| path.to_owned())?;

    let used = tree.size(tree.root());
    let small = fs::sum_of_small_dirs(&tree, SMALL_DIR_LIMIT);
    let deletion = fs::smallest_deletion(&tree, CAPACITY, REQUIRED)?;

    Report::new("d07")
        .part("total used", used)
        .part("sum of small directories", small)
        .part("smallest sufficient deletion", deletion)
        .print(&opts)
}
