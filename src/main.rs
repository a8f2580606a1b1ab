//! Headless driver for the navigation menu.
//!
//! Loads `navmenu.toml` (or the file given as the first argument), loads the
//! menu graph it points at, and replays a scripted session on the wide and
//! the narrow layout, logging every navigation command the menu emits.
//!
//! Run with `RUST_LOG=debug cargo run` to see controller transitions.

use std::rc::Rc;

use anyhow::{Context, Result, anyhow};
use navmenu_config::NavConfig;
use navmenu_scene::{
    CommandLog, ItemRef, MenuInput, MenuModel, NavigationShell, RouteContext, ScrollLockTarget,
    SheetContent,
};

const FRAME_MS: f32 = 16.0;

/// Page surface stand-in that logs scroll lock changes.
struct LoggedPage;

impl ScrollLockTarget for LoggedPage {
    fn set_scroll_locked(&mut self, locked: bool) {
        log::info!("page scroll {}", if locked { "locked" } else { "unlocked" });
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    config
        .validate()
        .map_err(|e| anyhow!(e))
        .context("invalid navigation menu configuration")?;

    let model = MenuModel::from_json_file(&config.menu.path)
        .with_context(|| format!("failed to load menu graph from {:?}", config.menu.path))?;
    let model = Rc::new(model);
    log::info!("loaded {} channels", model.channels().len());

    desktop_session(Rc::clone(&model), &config)?;
    sheet_session(model, &config)?;
    Ok(())
}

fn load_config() -> Result<NavConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let mut config = NavConfig::load_from_file(&path)
                .map_err(|e| anyhow!(e))
                .with_context(|| format!("failed to load config {path}"))?;
            config.merge_with_env();
            Ok(config)
        }
        None => Ok(NavConfig::load()),
    }
}

fn desktop_session(model: Rc<MenuModel>, config: &NavConfig) -> Result<()> {
    log::info!("--- wide layout session ---");
    let mut shell = NavigationShell::new(model, config, LoggedPage, 1280.0, 800.0);
    let mut page = CommandLog::new();

    let script = [
        MenuInput::PointerEnterTrigger("about-channel".into()),
        MenuInput::PointerLeaveTrigger,
        MenuInput::PointerEnterPanel,
        MenuInput::ActivateItem(ItemRef::new("about-channel", 0, 1)),
        MenuInput::PointerEnterTrigger("product-channel".into()),
        MenuInput::ActivateItem(ItemRef::new("product-channel", 0, 0)),
        MenuInput::ActivateTrigger("contact-channel".into()),
    ];
    for input in script {
        let mut ctx = RouteContext::new(true, &mut page);
        let result = shell.handle_input(input.clone(), &mut ctx)?;
        log::debug!("{input:?} -> {result:?}");
        shell.update(FRAME_MS);
        if let Some(frame) = shell.desktop_frame() {
            if let Some(panel) = frame.panel {
                log::info!("flyout open: {}", panel.channel_id);
            }
        }
        report(&mut page);
    }

    // Leave the trigger strip and let the grace window run out.
    let mut ctx = RouteContext::new(true, &mut page);
    shell.handle_input(MenuInput::PointerEnterTrigger("about-channel".into()), &mut ctx)?;
    shell.handle_input(MenuInput::PointerLeaveTrigger, &mut ctx)?;
    for _ in 0..12 {
        shell.update(FRAME_MS);
    }
    log::info!("flyout after grace window: {:?}", shell.hover().active_channel_id());

    shell.dispose();
    Ok(())
}

fn sheet_session(model: Rc<MenuModel>, config: &NavConfig) -> Result<()> {
    log::info!("--- narrow layout session ---");
    let mut shell = NavigationShell::new(model, config, LoggedPage, 390.0, 844.0);
    let mut page = CommandLog::new();

    let script = [
        MenuInput::ToggleMenu,
        MenuInput::ActivateTrigger("product-channel".into()),
        MenuInput::Back,
        MenuInput::ActivateTrigger("about-channel".into()),
        MenuInput::ActivateItem(ItemRef::new("about-channel", 0, 0)),
        MenuInput::ToggleMenu,
        MenuInput::DragUpdate { delta_y: 30.0 },
        MenuInput::DragEnd {
            delta_y: 30.0,
            velocity_y: 120.0,
        },
        MenuInput::DragUpdate { delta_y: 140.0 },
        MenuInput::DragEnd {
            delta_y: 140.0,
            velocity_y: 300.0,
        },
        MenuInput::ToggleMenu,
        MenuInput::ActivateTrigger("solutions-channel".into()),
    ];
    for input in script {
        let mut ctx = RouteContext::new(false, &mut page);
        let result = shell.handle_input(input.clone(), &mut ctx)?;
        log::debug!("{input:?} -> {result:?}");
        settle(&mut shell);
        if let Some(frame) = shell.sheet_frame() {
            let rows = match &frame.content {
                SheetContent::Channels(channels) => channels.len(),
                SheetContent::Lists(lists) => lists.iter().map(|l| l.items.len()).sum(),
            };
            log::info!(
                "sheet {:?} title={:?} height={:.0}px rows={rows}",
                frame.phase,
                frame.title,
                frame.height
            );
        }
        for event in shell.drain_sheet_events() {
            log::info!("sheet event: {event:?}");
        }
        report(&mut page);
    }

    shell.dispose();
    Ok(())
}

fn settle(shell: &mut NavigationShell) {
    for _ in 0..600 {
        if !shell.sheet().is_animating() {
            break;
        }
        shell.update(FRAME_MS);
    }
}

fn report(page: &mut CommandLog) {
    while let Some(command) = page.pop_command() {
        log::info!("navigation command: {command:?}");
    }
}
