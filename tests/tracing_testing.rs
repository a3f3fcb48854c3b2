#![cfg(feature = "trace")]

use std::{
    io,
    sync::{Arc, Mutex},
};

use model_path::{
    PropertyPath,
    models::{Todo, TodoPath},
};
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn includes_logs_each_accepted_relation() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let root = Arc::new(Todo::root_path());
        let child: Arc<dyn PropertyPath> =
            Arc::new(TodoPath::child(root.clone(), "subtasks", true));
        root.includes([child.clone(), child]).unwrap();
    });

    let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
    assert_eq!(output.matches("include relation").count(), 1);
    assert!(output.contains("path=root.subtasks"));
    assert!(output.contains("model=\"Todo\""));
}
