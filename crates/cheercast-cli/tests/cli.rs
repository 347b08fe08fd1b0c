use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("cheercast"))
}

#[test]
fn help_covers_both_subcommands() {
    cmd().arg("send").arg("--help").assert().success();
    cmd().arg("listen").arg("--help").assert().success();
}

#[test]
fn version_flag_works() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("cheercast"));
}

#[test]
fn send_requires_at_least_one_message() {
    cmd().arg("send").assert().failure();
}

#[test]
fn send_without_colour_shows_error_and_hint() {
    cmd()
        .arg("send")
        .arg("nothing colourful here")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("error:").and(contains("no known colour")))
        .stderr(contains("hint:"));
}

#[test]
fn send_rejects_unicast_group() {
    cmd()
        .arg("send")
        .arg("--group")
        .arg("127.0.0.1")
        .arg("red")
        .assert()
        .failure()
        .code(2)
        .stderr(contains("not a multicast address"));
}
