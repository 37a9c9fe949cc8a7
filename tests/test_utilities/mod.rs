//! Shared helpers for integration and e2e tests: canned Checkstyle reports
//! and a fake JDK whose `bin/java` is a shell script standing in for the
//! real tool.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const CLEAN_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<checkstyle version="10.12.4">
</checkstyle>
"#;

pub const FAILING_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<checkstyle version="10.12.4">
<file name="src/main/java/org/gradle/class1.java">
<error line="1" column="1" severity="error" message="Name 'class1' must match pattern '^[A-Z][a-zA-Z0-9]*$'." source="com.puppycrawl.tools.checkstyle.checks.naming.TypeNameCheck"/>
</file>
</checkstyle>
"#;

/// Lay out a fake JDK whose `java` runs the given shell script body.
#[cfg(unix)]
pub fn fake_jdk(parent: &Path, name: &str, version: &str, script_body: &str) -> PathBuf {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let root = parent.join(name);
    fs::create_dir_all(root.join("bin")).unwrap();
    let java = root.join("bin").join("java");
    fs::write(&java, format!("#!/bin/sh\n{}\n", script_body)).unwrap();
    fs::set_permissions(&java, fs::Permissions::from_mode(0o755)).unwrap();
    fs::write(
        root.join("release"),
        format!(
            "JAVA_VERSION=\"{}\"\nIMPLEMENTOR=\"Eclipse Adoptium\"\n",
            version
        ),
    )
    .unwrap();
    root
}

/// Script body that writes `report` to the path following `-o`, then exits
/// with `exit_code` (the real tool exits with its error count).
pub fn tool_script(report: &str, exit_code: i32) -> String {
    format!(
        r#"out=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-o" ]; then out="$arg"; fi
  prev="$arg"
done
cat > "$out" <<'REPORT_EOF'
{}REPORT_EOF
exit {}"#,
        report, exit_code
    )
}
