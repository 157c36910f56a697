use anyhow::{Context, Result};
use create_template::{
    error, registry, run, trace, Args, Created, Outcome, TerminalPrompter,
};
use std::process::ExitCode;

fn app(args: &Args) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to get current dir")?;
    trace!("Working directory: {}", cwd.display());

    let outcome = run(args, &cwd, &mut TerminalPrompter).context("creation failed")?;

    match outcome {
        Outcome::Help(text) => println!("{text}"),
        Outcome::Created(created) => next_steps(&created),
    }

    Ok(())
}

fn next_steps(created: &Created) {
    trace!(
        "Wrote {} files in {} directories",
        created.summary.files,
        created.summary.dirs
    );

    println!("\nDone. Now run:\n");

    if let Some(cd) = &created.cd {
        println!("  cd {}", cd.display());
    }

    if let Some(command) = registry::find_variant(&created.choice.template_id)
        .and_then(|variant| variant.custom_command)
    {
        println!("  {command}");
    }

    println!();
}

fn main() -> ExitCode {
    let args = Args::from_env();

    match app(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
