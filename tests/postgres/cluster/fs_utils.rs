//! Filesystem helpers for `PostgreSQL` test clusters.

use super::BoxError;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use postgresql_embedded::Settings;

fn open_ambient_dir(path: &Utf8Path) -> Result<Dir, BoxError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|err| Box::new(err) as BoxError)
}

fn read_optional(dir: &Dir, file_name: &str) -> Result<Option<String>, BoxError> {
    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(Box::new(err) as BoxError),
    }
}

/// Copies a generated superuser password into `settings`, if one was written.
pub(super) fn sync_password_from_file(settings: &mut Settings) -> Result<(), BoxError> {
    let password_path = settings.password_file.to_string_lossy().into_owned();
    let password_path = Utf8Path::new(&password_path);
    let file_name = password_path.file_name().ok_or_else(|| {
        Box::new(std::io::Error::other("password path must include a file name")) as BoxError
    })?;
    let parent = password_path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let dir = open_ambient_dir(parent)?;

    if let Some(contents) = read_optional(&dir, file_name)? {
        let password = contents.trim_end();
        if !password.is_empty() {
            password.clone_into(&mut settings.password);
        }
    }
    Ok(())
}

/// Reads the listening port back from `postmaster.pid` (fourth line).
pub(super) fn sync_port_from_pid(settings: &mut Settings) -> Result<(), BoxError> {
    let data_dir = settings.data_dir.to_string_lossy().into_owned();
    let dir = open_ambient_dir(Utf8Path::new(&data_dir))?;
    let Some(contents) = read_optional(&dir, "postmaster.pid")? else {
        return Ok(());
    };

    if let Some(port) = contents
        .lines()
        .nth(3)
        .and_then(|line| line.trim().parse::<u16>().ok())
    {
        settings.port = port;
    }
    Ok(())
}
