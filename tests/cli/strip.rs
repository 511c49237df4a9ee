use anyhow::Result;

use crate::CliTest;

#[test]
fn test_strip_rewrites_annotations_in_place() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.py", "def f() -> int:\n    return 1\n")?;
    test.write_file("b.py", "def g():\n    pass\n")?;

    let output = test.strip_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("Found 2 Python files"));
    assert!(stdout.contains("Stripped"));
    assert!(stdout.contains("Processed 2 file(s), rewrote 1"));
    assert_eq!(test.read_file("a.py")?, "def f():\n    return 1\n");
    assert_eq!(test.read_file("b.py")?, "def g():\n    pass\n");
    Ok(())
}

#[test]
fn test_strip_accepts_explicit_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("proj/a.py", "def f() -> None:\n    pass\n")?;

    let root = test.root().join("proj");
    let output = test.strip_command().arg(&root).output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("proj/a.py")?, "def f():\n    pass\n");
    Ok(())
}

#[test]
fn test_strip_is_not_recursive_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.py", "def f() -> int:\n    return 1\n")?;
    test.write_file("sub/c.py", "def g() -> None:\n    pass\n")?;

    let output = test.strip_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Found 1 Python file"));
    assert_eq!(test.read_file("a.py")?, "def f():\n    return 1\n");
    assert_eq!(test.read_file("sub/c.py")?, "def g() -> None:\n    pass\n");
    Ok(())
}

#[test]
fn test_strip_recursive_processes_subdirectories() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.py", "def f() -> int:\n    return 1\n")?;
    test.write_file("b.py", "def g():\n    pass\n")?;
    test.write_file("sub/c.py", "def g() -> None:\n    pass\n")?;

    let output = test.strip_command().arg("--recursive").output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Found 3 Python files"));

    // Scan order is stable: direct children sorted by name, then subtrees.
    let a = stdout.find("a.py").unwrap();
    let b = stdout.find("b.py").unwrap();
    let c = stdout.find("c.py").unwrap();
    assert!(a < b && b < c);

    assert_eq!(test.read_file("a.py")?, "def f():\n    return 1\n");
    assert_eq!(test.read_file("b.py")?, "def g():\n    pass\n");
    assert_eq!(test.read_file("sub/c.py")?, "def g():\n    pass\n");
    Ok(())
}

#[test]
fn test_strip_reads_recursive_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".dehintrc.json", r#"{ "recursive": true }"#)?;
    test.write_file("sub/c.py", "def g() -> None:\n    pass\n")?;

    let output = test.strip_command().output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("sub/c.py")?, "def g():\n    pass\n");
    Ok(())
}

#[test]
fn test_strip_never_touches_reserved_file() -> Result<()> {
    let test = CliTest::new()?;
    let content = "def f() -> int:\n    return 1\n";
    test.write_file("type_hint_stripper.py", content)?;

    let output = test.strip_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Found 0 Python files"));
    assert!(stdout.contains("No Python files to process"));
    assert_eq!(test.read_file("type_hint_stripper.py")?, content);
    Ok(())
}

#[test]
fn test_strip_reports_empty_scan() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("notes.txt", "no python here\n")?;

    let output = test.strip_command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("No Python files to process"));
    Ok(())
}

#[test]
fn test_strip_missing_directory_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.strip_command().arg("does-not-exist").output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("directory not found"));
    Ok(())
}

#[test]
fn test_strip_aborts_on_unreadable_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_bytes("bad.py", &[0xf8, 0xa1, 0xa1, 0xa1])?;
    test.write_file("z.py", "def g() -> int:\n    return 2\n")?;

    let output = test.strip_command().output()?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("failed to process"));
    // The failure came first in scan order, so the later file is untouched.
    assert_eq!(test.read_file("z.py")?, "def g() -> int:\n    return 2\n");
    Ok(())
}
