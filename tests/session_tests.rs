use mpad::{DocumentSession, Editor, FilePrompt, OpenOutcome, SaveOutcome, SessionError, TextBuffer};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Prompt with scripted answers that counts how often it was asked
#[derive(Default)]
struct ScriptedPrompt {
    opens: Vec<Option<PathBuf>>,
    saves: Vec<Option<PathBuf>>,
    open_calls: usize,
    save_calls: usize,
}

impl ScriptedPrompt {
    fn saving(answer: Option<PathBuf>) -> Self {
        Self {
            saves: vec![answer],
            ..Self::default()
        }
    }

    fn opening(answer: Option<PathBuf>) -> Self {
        Self {
            opens: vec![answer],
            ..Self::default()
        }
    }
}

impl FilePrompt for ScriptedPrompt {
    fn choose_open(&mut self) -> Option<PathBuf> {
        self.open_calls += 1;
        if self.opens.is_empty() {
            None
        } else {
            self.opens.remove(0)
        }
    }

    fn choose_save(&mut self) -> Option<PathBuf> {
        self.save_calls += 1;
        if self.saves.is_empty() {
            None
        } else {
            self.saves.remove(0)
        }
    }
}

fn session() -> DocumentSession {
    DocumentSession::new("MandeepPAD")
}

#[test]
fn test_new_session_is_untitled() {
    let session = session();
    assert_eq!(session.title(), "MandeepPAD");
    assert_eq!(session.path(), None);
    assert!(!session.is_modified());
}

#[test]
fn test_open_loads_file_and_sets_title() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "line one\nline two").unwrap();

    let mut session = session();
    let mut editor = Editor::from_text("old");
    let mut prompt = ScriptedPrompt::opening(Some(path.clone()));

    let outcome = session.open(&mut prompt, &mut editor).unwrap();
    assert_eq!(
        outcome,
        OpenOutcome::Opened {
            path: path.clone(),
            bytes: 17
        }
    );
    assert_eq!(editor.text(), "line one\nline two");
    assert_eq!(session.title(), "MandeepPAD - notes.txt");
    assert_eq!(session.path(), Some(path.as_path()));
    assert!(!session.is_modified());
}

#[test]
fn test_cancelled_open_changes_nothing() {
    let mut session = session();
    let mut editor = Editor::from_text("keep me");

    for answer in [None, Some(PathBuf::new())] {
        let mut prompt = ScriptedPrompt::opening(answer);
        let outcome = session.open(&mut prompt, &mut editor).unwrap();
        assert_eq!(outcome, OpenOutcome::Cancelled);
    }
    assert_eq!(editor.text(), "keep me");
    assert_eq!(session.title(), "MandeepPAD");
}

#[test]
fn test_failed_open_keeps_state() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.txt");

    let mut session = session();
    let mut editor = Editor::from_text("keep me");
    let mut prompt = ScriptedPrompt::opening(Some(missing.clone()));

    let err = session.open(&mut prompt, &mut editor).unwrap_err();
    assert!(matches!(err, SessionError::Read { .. }));
    assert_eq!(err.path(), &missing);
    assert_eq!(editor.text(), "keep me");
    assert_eq!(session.path(), None);
    assert_eq!(session.title(), "MandeepPAD");
}

#[test]
fn test_first_save_prompts_then_saves_silently() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("draft.txt");

    let mut session = session();
    let mut editor = Editor::new();
    editor.insert("first draft");
    session.mark_modified();

    let mut prompt = ScriptedPrompt::saving(Some(path.clone()));
    let outcome = session.save(&mut prompt, &editor).unwrap();
    assert_eq!(
        outcome,
        SaveOutcome::Saved {
            path: path.clone(),
            bytes: 11
        }
    );
    assert_eq!(prompt.save_calls, 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "first draft");
    assert_eq!(session.title(), "MandeepPAD - draft.txt");
    assert!(!session.is_modified());

    editor.insert(", revised");
    session.save(&mut prompt, &editor).unwrap();
    assert_eq!(prompt.save_calls, 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "first draft, revised");
}

#[test]
fn test_cancelled_first_save_writes_nothing() {
    let mut session = session();
    let editor = Editor::from_text("unsaved");
    session.mark_modified();

    let mut prompt = ScriptedPrompt::saving(None);
    assert_eq!(
        session.save(&mut prompt, &editor).unwrap(),
        SaveOutcome::Cancelled
    );
    assert_eq!(session.path(), None);
    assert!(session.is_modified());
}

#[test]
fn test_save_as_always_prompts_and_moves_path() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a.txt");
    let second = dir.path().join("b.txt");

    let mut session = session();
    let editor = Editor::from_text("content");
    let mut prompt = ScriptedPrompt {
        saves: vec![Some(first.clone()), Some(second.clone())],
        ..ScriptedPrompt::default()
    };

    session.save_as(&mut prompt, &editor).unwrap();
    session.save_as(&mut prompt, &editor).unwrap();

    assert_eq!(prompt.save_calls, 2);
    assert_eq!(fs::read_to_string(&first).unwrap(), "content");
    assert_eq!(fs::read_to_string(&second).unwrap(), "content");
    assert_eq!(session.path(), Some(second.as_path()));
    assert_eq!(session.title(), "MandeepPAD - b.txt");
}

#[test]
fn test_cancelled_save_as_keeps_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kept.txt");

    let mut session = session();
    let editor = Editor::from_text("x");
    let mut prompt = ScriptedPrompt::saving(Some(path.clone()));
    session.save(&mut prompt, &editor).unwrap();

    let mut cancel = ScriptedPrompt::saving(None);
    assert_eq!(
        session.save_as(&mut cancel, &editor).unwrap(),
        SaveOutcome::Cancelled
    );
    assert_eq!(session.path(), Some(path.as_path()));
}

#[test]
fn test_failed_write_keeps_previous_path() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.txt");
    let bad = dir.path().join("no_such_dir").join("bad.txt");

    let mut session = session();
    let editor = Editor::from_text("data");
    let mut prompt = ScriptedPrompt {
        saves: vec![Some(good.clone()), Some(bad.clone())],
        ..ScriptedPrompt::default()
    };

    session.save(&mut prompt, &editor).unwrap();
    let err = session.save_as(&mut prompt, &editor).unwrap_err();

    assert!(matches!(err, SessionError::Write { .. }));
    assert_eq!(err.path(), &bad);
    assert_eq!(session.path(), Some(good.as_path()));
    assert_eq!(session.title(), "MandeepPAD - good.txt");
}

#[test]
fn test_open_then_save_round_trips_exact_bytes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exact.txt");
    let original = "tabs\there\r\nunicode: héllo\n\n";
    fs::write(&path, original).unwrap();

    let mut session = session();
    let mut editor = Editor::new();
    let mut prompt = ScriptedPrompt::opening(Some(path.clone()));
    session.open(&mut prompt, &mut editor).unwrap();
    session.save(&mut prompt, &editor).unwrap();

    assert_eq!(prompt.save_calls, 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_open_from_works_with_any_text_buffer() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.txt");
    fs::write(&path, "via trait").unwrap();

    let mut session = session();
    let mut editor = Editor::new();
    let buffer: &mut dyn TextBuffer = &mut editor;
    session.open_from(Some(path), buffer).unwrap();

    assert_eq!(editor.text(), "via trait");
}
