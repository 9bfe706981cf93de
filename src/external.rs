//! Spawning of external commands, with optional output redirection.

use crate::parser::Command;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::process::{Child, Stdio};

/// Permission bits for redirection targets: read/write for owner, group
/// and others.
const REDIRECT_MODE: u32 = 0o666;

/// Spawns `command`, already resolved to `executable`, as a child process.
///
/// `argv[0]` is the resolved path rather than the name the user typed. The
/// child inherits the shell's environment and working directory. When the
/// command carries a redirection target, both its stdout and stderr are
/// bound to that file before the program starts; the shell's own streams
/// are never touched.
///
/// The caller is responsible for waiting on the returned [`Child`].
pub fn spawn(executable: &Path, command: &Command) -> Result<Child> {
    let mut child = std::process::Command::new(executable);
    child.args(&command.args);

    if let Some(target) = &command.redirect {
        let file = open_redirect_target(target)
            .with_context(|| format!("cannot redirect to {target}"))?;
        child.stdout(Stdio::from(file.try_clone()?));
        child.stderr(Stdio::from(file));
    }

    child
        .spawn()
        .with_context(|| format!("cannot run {}", executable.display()))
}

/// Creates or truncates the redirection target with permission bits
/// exactly `REDIRECT_MODE`, independent of the process umask.
fn open_redirect_target(target: &str) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(REDIRECT_MODE);
    }
    let file = options.open(target)?;
    #[cfg(unix)]
    {
        // The mode handed to open() is filtered through the umask; force
        // the exact bits afterwards.
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(Permissions::from_mode(REDIRECT_MODE))?;
    }
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn make_unique_temp_dir(tag: &str) -> io::Result<PathBuf> {
        let mut p = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        p.push(format!("wish_external_{}_{}_{}", tag, std::process::id(), nanos));
        fs::create_dir_all(&p)?;
        Ok(p)
    }

    fn command(name: &str, args: &[&str], redirect: Option<&str>) -> Command {
        Command {
            name: name.to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            redirect: redirect.map(str::to_string),
            bad_syntax: false,
        }
    }

    #[test]
    #[cfg(unix)]
    fn arguments_are_passed_through() {
        let cmd = command("sh", &["-c", "exit 3"], None);
        let mut child = spawn(Path::new("/bin/sh"), &cmd).unwrap();
        let status = child.wait().unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    #[cfg(unix)]
    fn redirection_captures_both_stdout_and_stderr() {
        let dir = make_unique_temp_dir("both_streams").unwrap();
        let out = dir.join("out.txt");

        let cmd = command(
            "sh",
            &["-c", "echo out; echo err 1>&2"],
            Some(&out.to_string_lossy()),
        );
        let mut child = spawn(Path::new("/bin/sh"), &cmd).unwrap();
        assert!(child.wait().unwrap().success());

        let contents = fs::read_to_string(&out).unwrap();
        assert!(contents.contains("out\n"), "got {:?}", contents);
        assert!(contents.contains("err\n"), "got {:?}", contents);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    #[cfg(unix)]
    fn redirection_target_gets_mode_0666() {
        use std::os::unix::fs::PermissionsExt;
        let dir = make_unique_temp_dir("mode").unwrap();
        let out = dir.join("out.txt");

        let cmd = command("true", &[], Some(&out.to_string_lossy()));
        let mut child = spawn(Path::new("/bin/true"), &cmd).unwrap();
        let _ = child.wait();

        let mode = fs::metadata(&out).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o666);

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    #[cfg(unix)]
    fn redirection_truncates_an_existing_target() {
        let dir = make_unique_temp_dir("truncate").unwrap();
        let out = dir.join("out.txt");
        fs::write(&out, "previous contents that are longer\n").unwrap();

        let cmd = command("sh", &["-c", "echo hi"], Some(&out.to_string_lossy()));
        let mut child = spawn(Path::new("/bin/sh"), &cmd).unwrap();
        assert!(child.wait().unwrap().success());

        assert_eq!(fs::read_to_string(&out).unwrap(), "hi\n");

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    #[cfg(unix)]
    fn unwritable_redirection_target_is_an_error() {
        let dir = make_unique_temp_dir("badtarget").unwrap();
        let target = dir.join("no_such_subdir").join("out.txt");

        let cmd = command("true", &[], Some(&target.to_string_lossy()));
        assert!(spawn(Path::new("/bin/true"), &cmd).is_err());

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_executable_is_an_error() {
        let cmd = command("nope", &[], None);
        assert!(spawn(Path::new("/definitely/not/a/program"), &cmd).is_err());
    }
}
