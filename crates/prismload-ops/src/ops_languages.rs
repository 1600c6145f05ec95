//! Operation: list the grammars in the catalog.

use crate::ops_setup::OpsContext;

pub fn languages(ctx: &OpsContext) -> miette::Result<()> {
    let catalog = ctx.catalog();
    if catalog.is_empty() {
        println!("No languages in the catalog.");
        return Ok(());
    }

    let width = catalog.ids().map(str::len).max().unwrap_or(0);
    for (id, def) in catalog.iter() {
        match &def.title {
            Some(title) => println!("{id:<width$}  {title}"),
            None => println!("{id}"),
        }
    }
    Ok(())
}
