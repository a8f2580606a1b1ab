/// Example program to print the loaded configuration
///
/// Run with: cargo run -p navmenu-config --example print_config

fn main() {
    let config = navmenu_config::NavConfig::load();

    println!("=== Navigation Menu Configuration ===\n");

    println!("Menu Source:");
    println!("  Path: {:?}", config.menu.path);
    println!();

    println!("Hover Settings:");
    println!("  Close Delay: {}ms", config.hover.close_delay_ms);
    println!();

    println!("Sheet Settings:");
    println!("  Commit Distance: {}px", config.sheet.commit_distance_px);
    println!("  Commit Velocity: {}px/s", config.sheet.commit_velocity_px_s);
    println!(
        "  Spring: stiffness={} damping={} mass={}",
        config.sheet.spring_stiffness, config.sheet.spring_damping, config.sheet.spring_mass
    );
    println!("  Close On Select: {}", config.sheet.close_on_select);
    println!();

    println!("Layout Settings:");
    println!("  Wide Breakpoint: {}px", config.layout.wide_breakpoint_px);
    println!("  Header Offset: {}px", config.layout.header_offset_px);
    println!();

    if let Err(e) = config.validate() {
        eprintln!("Configuration is invalid: {}", e);
    }

    match toml::to_string_pretty(&config) {
        Ok(toml_str) => {
            println!("=== Serialized Configuration ===");
            println!("{}", toml_str);
        }
        Err(e) => {
            eprintln!("Failed to serialize config: {}", e);
        }
    }
}
