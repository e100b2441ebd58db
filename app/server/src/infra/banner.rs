//! Startup banner

/// Print the startup banner with version info
pub fn print_banner(version: &str) {
    let banner = format!(
        r#"
 ██╗  ██╗ █████╗ ██╗    ██╗ █████╗
 ██║ ██╔╝██╔══██╗██║    ██║██╔══██╗
 █████╔╝ ███████║██║ █╗ ██║███████║
 ██╔═██╗ ██╔══██║██║███╗██║██╔══██║
 ██║  ██╗██║  ██║╚███╔███╔╝██║  ██║
 ╚═╝  ╚═╝╚═╝  ╚═╝ ╚══╝╚══╝ ╚═╝  ╚═╝

 Anime stream relay :: v{}
"#,
        version
    );

    tracing::info!("{}", banner);
}
