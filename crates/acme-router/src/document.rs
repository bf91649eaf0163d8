use tokio::sync::watch;

/// The host document, reduced to what navigation touches: its title.
///
/// Observers can `subscribe` and await title changes.
#[derive(Debug)]
pub struct Document {
    title: watch::Sender<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let (title, _) = watch::channel(String::new());
        Self { title }
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.title.send_replace(title.into());
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.title.subscribe()
    }
}
