use seekquill::bookmark::SeekPoint;
use seekquill::controller::MemoryInput;
use seekquill::panel::table::Column;
use seekquill::panel::BookmarksPanel;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink shared with the subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn with_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

fn panel() -> BookmarksPanel<MemoryInput> {
    let input = MemoryInput::new("movie.mkv", 600_000_000)
        .with_bookmarks(vec![SeekPoint::new("opening", 0, 0)]);
    let mut panel = BookmarksPanel::new(input);
    panel.select_row(0);
    panel
}

#[test]
fn test_bad_time_edit_is_logged_as_error() {
    let mut panel = panel();

    let logs = with_logs(|| panel.edit(0, Column::Time, "1:2:3:4"));

    assert!(logs.contains("ERROR"), "logs: {}", logs);
    assert!(logs.contains("Invalid string format for time"), "logs: {}", logs);
}

#[test]
fn test_good_time_edit_logs_no_error() {
    let mut panel = panel();

    let logs = with_logs(|| panel.edit(0, Column::Time, "1:30"));

    assert!(!logs.contains("ERROR"), "logs: {}", logs);
}
