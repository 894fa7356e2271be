/// Requests an app makes of the runtime during a frame.
///
/// They are queued and carried out once the frame callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    queued: Vec<Command>,
}

pub(crate) enum Command {
    SetTitle(String),
    Exit,
    /// Stop the loop and make `Runtime::run` return this error.
    Fail(anyhow::Error),
}

impl RuntimeCtx {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.queued.push(Command::SetTitle(title.into()));
    }

    pub fn exit(&mut self) {
        self.queued.push(Command::Exit);
    }

    /// Ends the run with `err`; the binaries report it and exit non-zero.
    pub fn fail(&mut self, err: anyhow::Error) {
        self.queued.push(Command::Fail(err));
    }

    pub(crate) fn into_commands(self) -> Vec<Command> {
        self.queued
    }
}
