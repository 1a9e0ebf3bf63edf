use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use sprint_test_utils::ConfigFileGuard;
use wiremock::matchers::{basic_auth, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sprint_report() -> Command {
  let mut cmd = Command::cargo_bin("sprint-report").expect("binary should be built");
  cmd.env_remove("JIRA_HOST").env("TZ", "UTC").env("NO_COLOR", "1");
  cmd
}

#[test]
fn test_help_command() {
  sprint_report()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("sprint-report"))
    .stdout(predicate::str::contains("report"))
    .stdout(predicate::str::contains("init"))
    .stdout(predicate::str::contains("boards"))
    .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_report_help_command() {
  sprint_report()
    .args(["report", "--help"])
    .assert()
    .success()
    .stdout(predicate::str::contains("--sprint"))
    .stdout(predicate::str::contains("--board"));
}

#[test]
fn test_config_directory_is_rejected() {
  let dir = tempfile::tempdir().unwrap();

  sprint_report()
    .arg("--config")
    .arg(dir.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn test_boards_requires_config() {
  let guard = ConfigFileGuard::empty();

  sprint_report()
    .arg("--config")
    .arg(guard.path())
    .arg("boards")
    .assert()
    .failure()
    .stderr(predicate::str::contains("No configuration file found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_boards_listing() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/rest/agile/1.0/board"))
    .and(basic_auth("test_user", "test_token"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "isLast": true,
        "values": [
            { "id": 2, "name": "Team B" },
            { "id": 5, "name": "Team A" }
        ]
    })))
    .mount(&server)
    .await;

  let guard = ConfigFileGuard::with_host(&server.uri(), 5);

  sprint_report()
    .arg("--config")
    .arg(guard.path())
    .arg("boards")
    .assert()
    .success()
    .stdout("5\tTeam A\n2\tTeam B\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_jira_host_env_overrides_config() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/rest/api/3/myself"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accountId": "abc" })))
    .expect(1)
    .mount(&server)
    .await;

  let guard = ConfigFileGuard::with_host("http://127.0.0.1:9", 5);

  sprint_report()
    .env("JIRA_HOST", server.uri())
    .arg("--config")
    .arg(guard.path())
    .arg("check")
    .assert()
    .success()
    .stdout(predicate::str::contains("are valid"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_rejected_credentials() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/rest/api/3/myself"))
    .respond_with(ResponseTemplate::new(401).set_body_string("Client must be authenticated"))
    .mount(&server)
    .await;

  let guard = ConfigFileGuard::with_host(&server.uri(), 5);

  sprint_report()
    .arg("--config")
    .arg(guard.path())
    .arg("check")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Authentication to Jira failed"))
    .stderr(predicate::str::contains("Client must be authenticated"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_report_for_sprint() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/rest/api/3/search"))
    .and(query_param("jql", "sprint = 77"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "total": 2,
        "issues": [
            { "key": "PTV-10", "fields": { "customfield_11127": 3, "customfield_11164": 2.5 } },
            { "key": "PTV-2", "fields": { "customfield_11127": null } }
        ]
    })))
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/rest/api/3/issue/PTV-2/changelog"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "isLast": true,
        "values": []
    })))
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/rest/api/3/issue/PTV-10/changelog"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "isLast": true,
        "values": [
            {
                "created": "2023-05-01T10:20:30.000+0000",
                "items": [{ "fieldId": "status", "to": "10685" }]
            },
            {
                "created": "2023-05-02T08:00:00.000-0200",
                "items": [{ "fieldId": "status", "to": "10686" }]
            }
        ]
    })))
    .mount(&server)
    .await;

  let guard = ConfigFileGuard::with_host(&server.uri(), 5);

  sprint_report()
    .arg("--config")
    .arg(guard.path())
    .args(["report", "--sprint", "77"])
    .assert()
    .success()
    .stdout(predicate::str::contains(
      "Found 2 tickets in sprint, fetching ticket history\n\
       Getting history for ticket PTV-2\n\
       Getting history for ticket PTV-10\n\
       \n\
       Ticket ID\tEst. SP\tAct. SP\tIn Prog\tDone\n\
       PTV-2\t\t\t\t\n\
       PTV-10\t3\t2.5\t2023-05-01 10:20:30\t2023-05-02 10:00:00\n",
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_report_api_failure() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/rest/api/3/search"))
    .respond_with(ResponseTemplate::new(400).set_body_string("The value '77' does not exist for the field 'sprint'."))
    .mount(&server)
    .await;

  let guard = ConfigFileGuard::with_host(&server.uri(), 5);

  sprint_report()
    .arg("--config")
    .arg(guard.path())
    .args(["report", "--sprint", "77"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to get sprint tickets: HTTP 400"))
    .stderr(predicate::str::contains("does not exist for the field 'sprint'"));
}

async fn mount_myself(server: &MockServer) {
  Mock::given(method("GET"))
    .and(path("/rest/api/3/myself"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "accountId": "abc" })))
    .mount(server)
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_colors_never_writes_no_escapes() {
  let server = MockServer::start().await;
  mount_myself(&server).await;
  Mock::given(method("GET"))
    .and(path("/rest/api/3/search"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 0, "issues": [] })))
    .mount(&server)
    .await;

  let guard = ConfigFileGuard::with_host(&server.uri(), 5);

  for args in [vec!["check"], vec!["report", "--sprint", "77"]] {
    sprint_report()
      .env_remove("NO_COLOR")
      .args(["--colors", "never", "--config"])
      .arg(guard.path())
      .args(&args)
      .assert()
      .success()
      .stdout(predicate::str::contains("\x1b").not());
  }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_colors_always_styles_status_lines() {
  let server = MockServer::start().await;
  mount_myself(&server).await;

  let guard = ConfigFileGuard::with_host(&server.uri(), 5);

  sprint_report()
    .args(["--colors", "always", "--config"])
    .arg(guard.path())
    .arg("check")
    .assert()
    .success()
    .stdout(predicate::str::contains("\x1b["))
    .stdout(predicate::str::contains("are valid"));
}

#[test]
fn test_fatal_error_is_printed_once_without_debug_dump() {
  let dir = tempfile::tempdir().unwrap();

  sprint_report()
    .arg("--config")
    .arg(dir.path())
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("is a directory"))
    .stderr(predicate::str::contains("Error:").not());
}

async fn mount_board_sprints(server: &MockServer, board_id: u64) {
  Mock::given(method("GET"))
    .and(path(format!("/rest/agile/1.0/board/{board_id}/sprint")))
    .and(basic_auth("test_user", "test_token"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "isLast": true,
        "values": [
            { "id": 23, "name": "Sprint B" },
            { "id": 22, "name": "Sprint A" }
        ]
    })))
    .mount(server)
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_default_command_prompts_for_sprint() {
  let server = MockServer::start().await;
  mount_board_sprints(&server, 5).await;

  Mock::given(method("GET"))
    .and(path("/rest/api/3/search"))
    .and(query_param("jql", "sprint = 22"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 0, "issues": [] })))
    .expect(1)
    .mount(&server)
    .await;

  let guard = ConfigFileGuard::with_host(&server.uri(), 5);

  sprint_report()
    .arg("--config")
    .arg(guard.path())
    .write_stdin("1\n")
    .assert()
    .success()
    .stdout(predicate::str::contains(
      "Please choose a sprint:\n1\tSprint A\n2\tSprint B\nEnter sprint number: ",
    ))
    .stdout(predicate::str::contains("Found 0 tickets in sprint"))
    .stdout(predicate::str::contains("Ticket ID\tEst. SP\tAct. SP\tIn Prog\tDone\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_default_command_rejects_out_of_range_choice() {
  let server = MockServer::start().await;
  mount_board_sprints(&server, 5).await;

  Mock::given(method("GET"))
    .and(path("/rest/api/3/search"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "total": 0, "issues": [] })))
    .expect(0)
    .mount(&server)
    .await;

  let guard = ConfigFileGuard::with_host(&server.uri(), 5);

  sprint_report()
    .arg("--config")
    .arg(guard.path())
    .write_stdin("9\n")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Please enter an integer between 1-2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sprints_listing_for_other_board() {
  let server = MockServer::start().await;
  mount_board_sprints(&server, 9).await;

  let guard = ConfigFileGuard::with_host(&server.uri(), 5);

  sprint_report()
    .arg("--config")
    .arg(guard.path())
    .args(["sprints", "--board", "9"])
    .assert()
    .success()
    .stdout("22\tSprint A\n23\tSprint B\n");
}
