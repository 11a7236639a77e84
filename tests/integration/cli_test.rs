//! Integration tests for the tabconv binary

#[cfg(test)]
mod cli_tests {
    use std::fs;
    use std::io::Write;
    use std::process::{Command, Output, Stdio};
    use tempfile::tempdir;

    fn run_tabconv(args: &[&str], stdin: Option<&str>) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_tabconv"))
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn tabconv");

        if let Some(input) = stdin {
            child
                .stdin
                .take()
                .unwrap()
                .write_all(input.as_bytes())
                .unwrap();
        } else {
            drop(child.stdin.take());
        }

        child.wait_with_output().unwrap()
    }

    #[test]
    fn test_import_from_stdin() {
        let output = run_tabconv(&["import", "-", "--compact"], Some("a,b\n1,x\n2"));

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.trim(), r#"[{"a":1,"b":"x"},{"a":2}]"#);
    }

    #[test]
    fn test_import_file_to_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.csv");
        fs::write(&input, "name|age\r\nAda|36\r\n").unwrap();
        let out = dir.path().join("json/out.json");

        let output = run_tabconv(
            &[
                "import",
                input.to_str().unwrap(),
                "--delimiter",
                "pipe",
                "--output",
                out.to_str().unwrap(),
            ],
            None,
        );

        assert!(output.status.success());
        assert!(String::from_utf8_lossy(&output.stdout).contains("Converted to"));
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!([{"name": "Ada", "age": 36}]));
    }

    #[test]
    fn test_export_writes_csv() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("rows.json");
        fs::write(&input, r#"[{"a": 1, "b": "x,y"}]"#).unwrap();

        let output = run_tabconv(
            &[
                "--quiet",
                "export",
                input.to_str().unwrap(),
                "--output-dir",
                dir.path().to_str().unwrap(),
                "--filename",
                "out.csv",
            ],
            None,
        );

        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        assert!(output.stdout.is_empty());
        let bytes = fs::read(dir.path().join("out.csv")).unwrap();
        assert_eq!(bytes, b"\xEF\xBB\xBFa,b\r\n1,\"x,y\"\r\n".to_vec());
    }

    #[test]
    fn test_export_invalid_json_reports_location() {
        let output = run_tabconv(&["export", "-"], Some("[{\"a\": 1,}]"));

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("JSON parse error at line 1"), "{}", stderr);
    }

    #[test]
    fn test_currency_defaults_to_turkish_lira() {
        let output = run_tabconv(&["currency", "1234.5"], None);

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "₺1.234,50");
    }

    #[test]
    fn test_invalid_delimiter_fails() {
        let output = run_tabconv(&["import", "-", "--delimiter", "ab"], Some("a\n1"));
        assert!(!output.status.success());
    }
}
