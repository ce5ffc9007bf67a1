use deploy_utils::cli::{OutputTarget, PruneArgs};
use deploy_utils::prelude::*;
use deploy_utils::shared::error::exit_code_for;
use deploy_utils::shared::logging::init_tracing;
use std::process;

fn main() {
    let args = PruneArgs::parse_args();
    init_tracing();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn run(args: PruneArgs) -> Result<()> {
    let use_case = PruneRequirementsUseCase::new(FileSystemReader::new());
    let response = use_case.execute(PruneRequest::new(args.base, args.req))?;

    tracing::debug!(
        removed = response.removed.len(),
        base_packages = response.base_package_count,
        "pruning finished"
    );

    // The requirements file has been read completely, so --out may point at it
    let presenter: Box<dyn OutputPresenter> = match args.out {
        OutputTarget::Stdout => Box::new(StdoutPresenter::new()),
        OutputTarget::File(path) => Box::new(FileSystemWriter::new(path)),
    };

    presenter.present(&response.content)
}
