use glasspad::clipboard::{ClipboardAdapter, ClipboardError, FailingClipboard, MemoryClipboard};
use glasspad::{
    Chrome, EditorConfig, FeedbackKind, InlineFormat, InputOutcome, Key, KeyChord, Modifiers,
    TextEditor, TransformKind,
};
use pollster::block_on;
use std::rc::Rc;
use std::time::Duration;

type Shared = ClipboardAdapter<Rc<FailingClipboard>, Rc<MemoryClipboard>>;

/// Primary tier denied (no user gesture), legacy tier works.
fn fallback_editor(chrome: Chrome) -> (TextEditor<Shared>, Rc<MemoryClipboard>) {
    let legacy = Rc::new(MemoryClipboard::new());
    let adapter = ClipboardAdapter::new(
        Rc::new(FailingClipboard::new(ClipboardError::PermissionDenied)),
        Rc::clone(&legacy),
    );
    (TextEditor::new(EditorConfig::new(chrome), adapter), legacy)
}

fn broken_editor() -> TextEditor<ClipboardAdapter<FailingClipboard, FailingClipboard>> {
    TextEditor::new(
        EditorConfig::new(Chrome::StatusLine),
        ClipboardAdapter::new(
            FailingClipboard::new(ClipboardError::Unsupported),
            FailingClipboard::new(ClipboardError::CommandFailed("no document".into())),
        ),
    )
}

#[test]
fn status_line_session_walkthrough() {
    let (mut ed, legacy) = fallback_editor(Chrome::StatusLine);
    assert_eq!(ed.status(), None);

    ed.focus();
    assert_eq!(ed.status(), Some("Editing..."));

    assert_eq!(
        ed.handle_input(r#"<p>hello world. <script>x()</script>how ARE you?</p>"#),
        InputOutcome::Replaced
    );
    assert_eq!(ed.text(), "hello world. x()how ARE you?");

    assert_eq!(
        block_on(ed.apply_transformation_named("sentence")),
        Some(true)
    );
    assert_eq!(ed.text(), "Hello world. X()how are you?");
    assert_eq!(legacy.contents().as_deref(), Some("Hello world. X()how are you?"));
    assert_eq!(ed.status(), Some("Text converted & copied"));

    ed.blur();
    assert_eq!(ed.status(), Some("Ready to format"));
}

#[test]
fn blank_content_is_refused_by_status_chrome() {
    let (mut ed, legacy) = fallback_editor(Chrome::StatusLine);
    ed.handle_input(" \n ");
    assert!(!block_on(ed.apply_transformation(TransformKind::Uppercase)));
    assert_eq!(ed.status(), Some("Add some text first"));
    assert!(!block_on(ed.copy_text()));
    assert_eq!(ed.status(), Some("Nothing to copy"));
    assert_eq!(legacy.write_count(), 0);
}

#[test]
fn banner_chrome_transforms_even_blank_content() {
    let (mut ed, legacy) = fallback_editor(Chrome::FeedbackBanner);
    assert!(block_on(ed.apply_transformation(TransformKind::TitleCase)));
    assert_eq!(legacy.contents().as_deref(), Some(""));
    let feedback = ed.take_feedback();
    assert_eq!(feedback.len(), 1);
    assert_eq!(feedback[0].kind, FeedbackKind::Banner);
    assert_eq!(feedback[0].duration, Some(Duration::from_millis(2000)));
}

#[test]
fn unknown_transformation_changes_nothing() {
    let (mut ed, legacy) = fallback_editor(Chrome::StatusLine);
    ed.handle_input("<b>keep</b> me");
    let before = ed.buffer().value_revision();
    ed.take_feedback();

    assert_eq!(block_on(ed.apply_transformation_named("shuffle")), None);
    assert_eq!(ed.content_markup(), "<b>keep</b> me");
    assert_eq!(ed.buffer().value_revision(), before);
    assert!(ed.feedback().is_empty());
    assert_eq!(legacy.write_count(), 0);
}

#[test]
fn copy_reports_success_and_failure() {
    let (mut ed, legacy) = fallback_editor(Chrome::StatusLine);
    ed.handle_input("copy <i>me</i>");
    assert!(block_on(ed.copy_text()));
    assert_eq!(legacy.contents().as_deref(), Some("copy me"));
    assert_eq!(ed.status(), Some("Copied to clipboard"));

    let mut broken = broken_editor();
    broken.handle_input("text");
    assert!(!block_on(broken.copy_text()));
    assert_eq!(broken.status(), Some("Copy failed"));
    assert!(
        broken
            .feedback()
            .iter()
            .all(|f| f.kind == FeedbackKind::Status)
    );
}

#[test]
fn failed_copy_after_transformation_still_transforms() {
    let mut ed = broken_editor();
    ed.handle_input("shout");
    assert!(!block_on(ed.apply_transformation(TransformKind::Uppercase)));
    assert_eq!(ed.text(), "SHOUT");
    assert_eq!(ed.status(), Some("Copy failed"));
}

#[test]
fn paste_inserts_plain_text_at_the_caret() {
    let (mut ed, _) = fallback_editor(Chrome::StatusLine);
    ed.handle_input("<b>ab</b>");
    ed.set_selection(1, 1);
    ed.handle_paste("<i>x</i>\r\ny");
    assert_eq!(ed.text(), "a<i>x</i>\nyb");
    assert_eq!(
        ed.content_markup(),
        "<b>a&lt;i&gt;x&lt;/i&gt;<br>yb</b>"
    );
    assert_eq!(ed.status(), Some("Text pasted"));
    let rendered = ed.content_markup();
    assert_eq!(ed.handle_input(&rendered), InputOutcome::Unchanged);
}

#[test]
fn formatting_shortcuts_toggle_the_selection() {
    let (mut ed, _) = fallback_editor(Chrome::StatusLine);
    ed.focus();
    ed.handle_input("one two");
    ed.set_selection(4, 7);

    assert!(block_on(ed.handle_key(KeyChord::ctrl('b'))));
    assert!(block_on(ed.handle_key(KeyChord::new(Key::Char('i'), Modifiers::COMMAND))));
    assert_eq!(ed.content_markup(), "one <b><i>two</i></b>");
    assert!(ed.active_formats().contains(InlineFormat::Italic));

    assert!(block_on(ed.handle_key(KeyChord::ctrl('b'))));
    assert_eq!(ed.content_markup(), "one <i>two</i>");
}

#[test]
fn formatting_without_selection_covers_everything() {
    let (mut ed, _) = fallback_editor(Chrome::StatusLine);
    ed.handle_input("abc");
    ed.set_selection(1, 1);
    assert_eq!(ed.apply_formatting(InlineFormat::Underline), Some(true));
    assert_eq!(ed.content_markup(), "<u>abc</u>");
    assert_eq!(ed.buffer().caret(), 3);
    assert_eq!(ed.buffer().selection(), None);
}

#[test]
fn ctrl_c_copies_without_consuming_the_chord() {
    let (mut ed, legacy) = fallback_editor(Chrome::StatusLine);
    ed.focus();
    ed.handle_input("all of it");
    assert!(!block_on(ed.handle_key(KeyChord::ctrl('c'))));
    assert_eq!(legacy.contents().as_deref(), Some("all of it"));

    let (mut banner, banner_legacy) = fallback_editor(Chrome::FeedbackBanner);
    banner.focus();
    banner.handle_input("all of it");
    assert!(!block_on(banner.handle_key(KeyChord::ctrl('c'))));
    assert_eq!(banner_legacy.contents(), None);
}

#[test]
fn clear_empties_and_refocuses() {
    let (mut ed, _) = fallback_editor(Chrome::StatusLine);
    ed.handle_input("<b>gone</b>");
    ed.clear_text();
    assert_eq!(ed.text(), "");
    assert_eq!(ed.content_markup(), "");
    assert!(ed.is_focused());
    assert_eq!(ed.status(), Some("Text cleared"));
}

#[test]
fn sanitized_input_keeps_only_allowed_structure() {
    let (mut ed, _) = fallback_editor(Chrome::StatusLine);
    let outcome = ed.handle_input(
        r#"<div class="x"><a href="javascript:alert(1)">link</a> <strong onclick="y()">bold</strong></div><div><img src=x onerror=z()>next</div>"#,
    );
    assert_eq!(outcome, InputOutcome::Replaced);
    assert_eq!(ed.text(), "link bold\nnext");
    assert_eq!(ed.content_markup(), "link <b>bold</b><br>next");
}

#[test]
fn deeply_nested_paste_loads_as_formatted_text() {
    let (mut ed, _) = fallback_editor(Chrome::StatusLine);
    let depth = 200_000;
    let markup = "<font><i>".repeat(depth) + "deep";
    assert_eq!(ed.handle_input(&markup), InputOutcome::Replaced);
    assert_eq!(ed.text(), "deep");
    assert_eq!(ed.content_markup(), "<i>deep</i>");
}

#[test]
fn ctrl_a_is_not_consumed() {
    let (mut ed, _) = fallback_editor(Chrome::StatusLine);
    ed.focus();
    ed.handle_input("abc");
    assert!(!block_on(ed.handle_key(KeyChord::ctrl('a'))));
    assert_eq!(ed.buffer().selection(), None);
}
