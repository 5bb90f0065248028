use std::process::ExitCode;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

pub(crate) const SUCCESS_MESSAGE: &str =
    "Queries and mutations generated successfully.";

/// Reports a command-line parsing failure.
///
/// Help and version requests are printed as-is. Anything else is an argument
/// usage error: the rendered usage message goes to stdout and the process
/// exits with status 1.
pub(crate) fn report_arg_error(err: clap::Error) -> ExitCode {
    use clap::error::ErrorKind;
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        },

        _ => {
            println!("{}", err.render());
            ExitCode::FAILURE
        },
    }
}
