//! Tests for the interactive prompt session.

use super::*;
use std::io::Cursor;
use tempfile::TempDir;

fn scripted(script: &str) -> PromptSession<Cursor<Vec<u8>>, Vec<u8>> {
    PromptSession::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_tool_choice_keywords() {
    assert_eq!(parse_tool_choice("all"), ToolChoice::All);
    assert_eq!(parse_tool_choice(" ALL "), ToolChoice::All);
    assert_eq!(parse_tool_choice(""), ToolChoice::Inherit);
    assert_eq!(parse_tool_choice("none"), ToolChoice::Inherit);
    assert_eq!(parse_tool_choice("None"), ToolChoice::Inherit);
}

#[test]
fn test_tool_choice_indices_are_one_based() {
    assert_eq!(
        parse_tool_choice("1,3"),
        ToolChoice::Picked(strings(&["Read", "Grep"]))
    );
    assert_eq!(
        parse_tool_choice(" 16 , 2 "),
        ToolChoice::Picked(strings(&["MoveFile", "Write"]))
    );
}

#[test]
fn test_tool_choice_skips_out_of_range_and_duplicates() {
    assert_eq!(
        parse_tool_choice("0,1,17,99,1"),
        ToolChoice::Picked(strings(&["Read"]))
    );
    assert_eq!(parse_tool_choice("42"), ToolChoice::Picked(Vec::new()));
}

#[test]
fn test_tool_choice_skips_negative_indices() {
    assert_eq!(parse_tool_choice("-1"), ToolChoice::Picked(Vec::new()));
    assert_eq!(
        parse_tool_choice("1,-1"),
        ToolChoice::Picked(strings(&["Read"]))
    );
}

#[test]
fn test_negative_index_answer_does_not_select_all() {
    let mut session = scripted("-1\n");
    assert_eq!(session.choose_tools().unwrap(), Some(Vec::new()));
}

#[test]
fn test_tool_choice_unparsable() {
    assert_eq!(parse_tool_choice("read, write"), ToolChoice::Unparsable);
    assert_eq!(parse_tool_choice("1,x"), ToolChoice::Unparsable);
    assert_eq!(parse_tool_choice("1.5"), ToolChoice::Unparsable);
}

#[test]
fn test_unparsable_tool_answer_selects_all() {
    let mut session = scripted("whatever\n");
    let tools = session.choose_tools().unwrap();
    assert_eq!(tools.map(|t| t.len()), Some(TOOLS.len()));
}

#[test]
fn test_menu_choice_defaults_to_first_entry() {
    assert_eq!(parse_menu_choice("2", &Model::ALL), Model::Opus);
    assert_eq!(parse_menu_choice("4", &Model::ALL), Model::Inherit);
    assert_eq!(parse_menu_choice("", &Model::ALL), Model::Sonnet);
    assert_eq!(parse_menu_choice("5", &Model::ALL), Model::Sonnet);
    assert_eq!(parse_menu_choice("0", &Model::ALL), Model::Sonnet);
    assert_eq!(parse_menu_choice("opus", &Model::ALL), Model::Sonnet);
    assert_eq!(
        parse_menu_choice("3", &PermissionMode::ALL),
        PermissionMode::BypassPermissions
    );
}

#[test]
fn test_multiline_stops_at_end_marker_any_case() {
    for marker in ["END", "end", "  End  "] {
        let mut session = scripted(&format!("first line\nsecond line\n{}\nignored\n", marker));
        assert_eq!(session.read_multiline().unwrap(), "first line\nsecond line");
    }
}

#[test]
fn test_multiline_stops_at_eof() {
    let mut session = scripted("only line\n");
    assert_eq!(session.read_multiline().unwrap(), "only line");
}

#[test]
fn test_multiline_keeps_lines_that_merely_contain_end() {
    let mut session = scripted("send the report\nENDING\nEND\n");
    assert_eq!(session.read_multiline().unwrap(), "send the report\nENDING");
}

#[test]
fn test_confirm_uses_default_on_blank() {
    assert!(scripted("\n").confirm("Save?", true).unwrap());
    assert!(!scripted("\n").confirm("Save?", false).unwrap());
    assert!(scripted("yes\n").confirm("Save?", false).unwrap());
    assert!(!scripted("n\n").confirm("Save?", true).unwrap());
}

#[test]
fn test_ask_writes_prompt() {
    let mut session = scripted("answer\n");
    assert_eq!(session.ask("Question: ").unwrap(), "answer");
    assert_eq!(String::from_utf8(session.output).unwrap(), "Question: ");
}

#[test]
fn test_project_location_defers_to_save() {
    let project = Path::new("/work/project");
    let expected = Destination {
        project_path: project.to_path_buf(),
        output: None,
    };

    let mut session = scripted("1\n\n");
    assert_eq!(session.choose_output("helper", project, None).unwrap(), expected);

    let mut session = scripted("\n\n");
    assert_eq!(session.choose_output("helper", project, None).unwrap(), expected);
}

#[test]
fn test_project_location_accepts_other_project_path() {
    let other = TempDir::new().unwrap();
    let mut session = scripted(&format!("1\n{}\n", other.path().display()));

    let destination = session
        .choose_output("helper", Path::new("/work/project"), None)
        .unwrap();

    assert_eq!(destination.project_path, other.path());
    assert_eq!(destination.output, None);
    let transcript = String::from_utf8(session.output).unwrap();
    assert!(transcript.contains("Project path [/work/project]: "));
}

#[test]
fn test_user_location_creates_personal_dir_immediately() {
    let home = TempDir::new().unwrap();
    let mut session = scripted("2\n");

    let destination = session
        .choose_output("helper", Path::new("."), Some(home.path()))
        .unwrap();

    let personal = home.path().join(".claude").join("agents");
    assert!(personal.is_dir());
    assert_eq!(destination.output, Some(personal.join("helper.md")));
    assert!(!personal.join("helper.md").exists());
}

#[test]
fn test_user_location_without_home_fails() {
    let mut session = scripted("2\n");
    assert!(session.choose_output("helper", Path::new("."), None).is_err());
}

#[test]
fn test_custom_location_file_and_directory() {
    let temp = TempDir::new().unwrap();
    let here = Path::new(".");
    let file = temp.path().join("agent.md");
    let mut session = scripted(&format!("3\n{}\n", file.display()));
    assert_eq!(session.choose_output("helper", here, None).unwrap().output, Some(file));

    let mut session = scripted(&format!("3\n{}\n", temp.path().display()));
    assert_eq!(
        session.choose_output("helper", here, None).unwrap().output,
        Some(temp.path().join("helper.md"))
    );

    let mut session = scripted(&format!("3\n{}/new/\n", temp.path().display()));
    assert_eq!(
        session.choose_output("helper", here, None).unwrap().output,
        Some(temp.path().join("new").join("helper.md"))
    );
}

#[test]
fn test_collect_full_session() {
    let project = TempDir::new().unwrap();
    let script = "\
My Agent_Name
Write tests for the parser.
Review the results.
END
1,2
2
y
4
rust, , testing
blue
1

";
    let mut session = scripted(script);
    let request = session
        .collect(project.path().to_path_buf(), None)
        .unwrap();

    assert_eq!(request.name, "my-agent-name");
    assert_eq!(
        request.requirements,
        "Write tests for the parser.\nReview the results."
    );
    assert_eq!(request.tools, Some(strings(&["Read", "Write"])));
    assert_eq!(request.model, "opus");
    assert!(request.proactive);
    assert_eq!(request.permission_mode, "plan");
    assert_eq!(request.skills, Some(strings(&["rust", "testing"])));
    assert_eq!(request.color.as_deref(), Some("blue"));
    assert_eq!(request.output, None);
    assert_eq!(request.project_path, project.path());
}

#[test]
fn test_collect_defaults_on_blank_answers() {
    let script = "helper\nDo things\nEND\n\n\n\n\n\n\n\n";
    let mut session = scripted(script);
    let request = session.collect(PathBuf::from("."), None).unwrap();

    assert_eq!(request.tools, None);
    assert_eq!(request.model, "sonnet");
    assert!(!request.proactive);
    assert_eq!(request.permission_mode, "default");
    assert_eq!(request.skills, None);
    assert_eq!(request.color, None);
    assert_eq!(request.output, None);
    assert_eq!(request.project_path, PathBuf::from("."));
}

#[test]
fn test_collect_rejects_empty_name() {
    let mut session = scripted("   \n");
    let err = session.collect(PathBuf::from("."), None).unwrap_err();
    assert_eq!(err.to_string(), "agent name is required");
    assert_eq!(err.exit_code(), crate::exit_codes::USER_ERROR);
}

#[test]
fn test_collect_rejects_empty_requirements() {
    let mut session = scripted("helper\n\n  \nEND\n");
    let err = session.collect(PathBuf::from("."), None).unwrap_err();
    assert_eq!(err.to_string(), "agent requirements are required");
}
