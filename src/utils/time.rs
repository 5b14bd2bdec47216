use chrono::Local;

/// Local wall-clock time, `dd/mm/yyyy, HH:MM:SS`
pub fn local_timestamp() -> String {
    Local::now().format("%d/%m/%Y, %H:%M:%S").to_string()
}
