//! Operation: print the script files a page needs for a set of grammars.

use prismload_resolver::plan::AssetSession;

use crate::ops_setup::OpsContext;

/// Register every language in one session, in the given order.
pub fn build_plan(ctx: &OpsContext, languages: &[String]) -> AssetSession {
    let catalog = ctx.catalog();
    let mut session = AssetSession::new(&ctx.config.assets);
    for language in languages {
        if !session.register(&catalog, language) {
            tracing::debug!("{language} already registered, skipping");
        }
    }
    session
}

pub fn plan(ctx: &OpsContext, languages: &[String], json: bool) -> miette::Result<()> {
    let session = build_plan(ctx, languages);

    if json {
        println!("{}", crate::to_json(session.files())?);
        return Ok(());
    }

    prismload_util::progress::status_info(
        "Planned",
        &format!(
            "{} file(s) for {}",
            session.files().len(),
            session.languages().join(", ")
        ),
    );
    for file in session.files() {
        println!("{file}");
    }
    Ok(())
}
