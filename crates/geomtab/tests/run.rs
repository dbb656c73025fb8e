use assert_cmd::Command;
use insta::assert_snapshot;

fn geomtab() -> Command {
    Command::cargo_bin("geomtab").unwrap()
}

#[test]
fn water() {
    let assert = geomtab().arg("testfiles/water.xyz").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert_snapshot!(stdout);
}

#[test]
fn c70() {
    let assert = geomtab().arg("testfiles/c70.xyz").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert_snapshot!(stdout);
}

#[test]
fn usage_errors() {
    // missing and extra arguments both exit 1
    geomtab().assert().failure().code(1);
    geomtab()
        .args(["testfiles/water.xyz", "extra.xyz"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn missing_file() {
    geomtab().arg("testfiles/nope.xyz").assert().failure();
}

#[test]
fn bad_coordinate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.xyz");
    std::fs::write(&path, "1\ncomment\nC one two three\n").unwrap();
    geomtab().arg(&path).assert().failure();
}

#[test]
fn pagination() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chain100.xyz");
    let mut body = String::from("100\ngenerated carbon chain\n");
    for i in 0..100 {
        body.push_str(&format!("C {i}.5 0.25 -1.0\n"));
    }
    std::fs::write(&path, body).unwrap();

    let assert = geomtab().arg(&path).assert().success();
    let stdout =
        String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.starts_with("100 atoms\n\n"));
    // 100 atoms split into pages of 66 and 34
    assert_eq!(stdout.matches(r"\begin{longtable}").count(), 2);
    assert_eq!(stdout.matches(r"\clearpage").count(), 1);
    // the display name comes from the file stem
    assert!(stdout.contains(r"\textbf{chain100}"));
}
