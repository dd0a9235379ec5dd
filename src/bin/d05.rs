use anyhow::{Context, Result};
use lib::cli::{Opts, Report};
use lib::input::Input;
use lib::supply;

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let path = opts.input("inputs/d05.txt");
    let input = Input::load(path)?;

    let procedure = supply::parse(input.lines()).with_context(|| path.to_owned())?;

    let single = supply::rearrange_single(procedure.stacks.clone(), &procedure.moves)?;
    let bulk = supply::rearrange_bulk(procedure.stacks, &procedure.moves)?;

    Report::new("d05")
        .part("one at a time", single)
        .part("in bulk", bulk)
        .print(&opts)
}
