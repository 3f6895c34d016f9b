/// Console adapters - progress narration and stdout presentation.
pub mod progress_reporter;
pub mod stdout_presenter;

pub use progress_reporter::StderrProgressReporter;
pub use stdout_presenter::StdoutPresenter;
