/// Everything a menu item, toolbar button or shortcut can trigger
///
/// Commands carry no arguments; anything they need from the user is
/// requested through a prompt after the command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // File
    NewWindow,
    Open,
    Save,
    SaveAs,
    CloseWindow,
    Quit,

    // Edit
    DeleteSelection,
    SelectAll,

    // Tools
    Find,
    FindNext,
    FindAgain,
    InsertDate,
    CharCount,
    WordCount,

    // View
    ToggleMenuBar,
    ToggleToolBar,
    ToggleStatusBar,
    NextWindow,

    // Help
    About,
}
