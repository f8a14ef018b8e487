use colored::*;
use found_files_core::FoundFile;

pub fn print_found_file(file: &FoundFile) {
    println!("{} {}", "source:".bold(), file.source);
    println!("{} {}", "path:".bold(), file.path.cyan());
    println!("{} {}", "md5:".bold(), file.md5hash.yellow());
    println!("{} {} ({})", "name:".bold(), file.name, display_or_dash(&file.extension));
    println!("{} {} bytes", "size:".bold(), file.size);
    println!(
        "{} {} / {} / {}",
        "class:".bold(),
        display_or_dash(&file.file_type),
        display_or_dash(&file.category),
        display_or_dash(&file.label),
    );
    println!("{} {}", "modified:".bold(), file.modified.to_rfc3339());
    println!("{} {}", "discovered:".bold(), file.discovered.to_rfc3339());
    println!("{} {}", "last checked:".bold(), file.last_checked.to_rfc3339());
}

pub fn print_version_line(file: &FoundFile) {
    println!(
        "{}  {:>12}  {}  {}",
        file.md5hash.yellow(),
        file.size,
        file.discovered.to_rfc3339().green(),
        file.last_checked.to_rfc3339(),
    );
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
