//! Content-driven sheet height estimation.
//!
//! The sheet is sized from its content instead of measuring rendered
//! elements: a fixed header cost plus per-row and per-group costs, clamped to
//! a band of the viewport height that depends on the view. The constants come
//! from `HeightConfig` and should track the design system's measured sizes.

use navmenu_config::HeightConfig;

use crate::model::{ItemKind, MenuChannel, MenuItem, MenuList};
use crate::view_stack::SheetView;

#[derive(Debug, Clone, PartialEq)]
pub struct HeightEstimator {
    config: HeightConfig,
}

impl Default for HeightEstimator {
    fn default() -> Self {
        Self::new(HeightConfig::default())
    }
}

impl HeightEstimator {
    pub fn new(config: HeightConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HeightConfig {
        &self.config
    }

    /// Unclamped content height of the main view.
    pub fn main_content_height(&self, channels: &[MenuChannel]) -> f32 {
        let c = &self.config;
        c.header_px + c.main_group_label_px + channels.len() as f32 * c.main_row_px + c.padding_px
    }

    /// Unclamped content height of a submenu showing `lists`.
    pub fn submenu_content_height(&self, lists: &[MenuList]) -> f32 {
        let c = &self.config;
        let body: f32 = lists
            .iter()
            .map(|list| {
                let label = if list.group_label.is_some() {
                    c.submenu_group_label_px
                } else {
                    0.0
                };
                label + self.rows_height(&list.items)
            })
            .sum();
        c.header_px + body + c.padding_px
    }

    pub fn estimate_main(&self, channels: &[MenuChannel], viewport_height: f32) -> f32 {
        self.clamp(
            SheetView::Main,
            self.main_content_height(channels),
            viewport_height,
        )
    }

    pub fn estimate_submenu(&self, lists: &[MenuList], viewport_height: f32) -> f32 {
        self.clamp(
            SheetView::Submenu,
            self.submenu_content_height(lists),
            viewport_height,
        )
    }

    /// Clamp band `(min, max)` in px for `view`.
    pub fn bounds(&self, view: SheetView, viewport_height: f32) -> (f32, f32) {
        let c = &self.config;
        let vh = viewport_height.max(0.0);
        match view {
            SheetView::Main => (c.main_min_fraction * vh, c.main_max_fraction * vh),
            SheetView::Submenu => (c.submenu_min_fraction * vh, c.submenu_max_fraction * vh),
        }
    }

    fn clamp(&self, view: SheetView, raw: f32, viewport_height: f32) -> f32 {
        let (min, max) = self.bounds(view, viewport_height);
        // max() then min() so a misconfigured band never panics.
        raw.max(min).min(max)
    }

    /// Items flow into `columns` per row; full-width items take a row alone.
    fn rows_height(&self, items: &[MenuItem]) -> f32 {
        let columns = self.config.columns.max(1) as usize;
        let mut total = 0.0;
        let mut row_fill = 0;
        let mut row_height: f32 = 0.0;

        for item in items {
            let height = self.item_height(item);
            if item.effective_spans_all_columns(true) {
                total += row_height;
                row_fill = 0;
                row_height = 0.0;
                total += height;
                continue;
            }
            row_height = row_height.max(height);
            row_fill += 1;
            if row_fill == columns {
                total += row_height;
                row_fill = 0;
                row_height = 0.0;
            }
        }
        total + row_height
    }

    fn item_height(&self, item: &MenuItem) -> f32 {
        match item.kind {
            ItemKind::Plain => self.config.submenu_item_px,
            ItemKind::ImageCard => self.config.image_card_px,
            ItemKind::ImageFlyoutPanel => self.config.flyout_panel_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(n: usize) -> Vec<MenuChannel> {
        (0..n)
            .map(|i| MenuChannel::new(format!("c{i}"), format!("Channel {i}"), vec![]))
            .collect()
    }

    #[test]
    fn main_height_counts_rows() {
        let estimator = HeightEstimator::default();
        // 72 header + 32 group label + 4 × 56 rows + 24 padding
        assert_eq!(estimator.main_content_height(&channels(4)), 352.0);
        assert_eq!(estimator.estimate_main(&channels(4), 800.0), 352.0);
    }

    #[test]
    fn main_height_is_clamped_to_viewport_band() {
        let estimator = HeightEstimator::default();
        for n in [0, 1, 4, 12, 40] {
            let h = estimator.estimate_main(&channels(n), 800.0);
            assert!((280.0..=680.0).contains(&h), "{n} channels gave {h}");
        }
        assert_eq!(estimator.estimate_main(&channels(0), 800.0), 280.0);
        assert_eq!(estimator.estimate_main(&channels(40), 800.0), 680.0);
    }

    #[test]
    fn submenu_height_accounts_for_cards_and_panels() {
        let estimator = HeightEstimator::default();
        let lists = vec![
            MenuList::labeled(
                "Company",
                vec![MenuItem::new("Team"), MenuItem::new("Careers")],
            ),
            MenuList::new(vec![
                MenuItem::new("Blog").with_kind(ItemKind::ImageCard),
                MenuItem::new("Showcase").with_kind(ItemKind::ImageFlyoutPanel),
            ]),
        ];
        // 72 + (36 + 64 + 64) + (180 + 220) + 24
        assert_eq!(estimator.submenu_content_height(&lists), 660.0);
        assert_eq!(estimator.estimate_submenu(&lists, 1000.0), 660.0);
        assert_eq!(estimator.estimate_submenu(&lists, 600.0), 510.0);
    }

    #[test]
    fn short_submenus_use_submenu_minimum() {
        let estimator = HeightEstimator::default();
        let lists = vec![MenuList::new(vec![MenuItem::new("Only")])];
        assert_eq!(estimator.estimate_submenu(&lists, 1000.0), 400.0);
        assert_eq!(estimator.bounds(SheetView::Submenu, 1000.0), (400.0, 850.0));
    }

    #[test]
    fn multi_column_rows_share_height() {
        let estimator = HeightEstimator::new(HeightConfig {
            columns: 2,
            ..HeightConfig::default()
        });
        let items = vec![
            MenuItem::new("A"),
            MenuItem::new("B").with_kind(ItemKind::ImageCard),
            MenuItem::new("C"),
            MenuItem::new("Wide").spanning_all_columns(),
        ];
        // row(A, B) = 180, row(C) = 64, Wide = 64
        assert_eq!(estimator.rows_height(&items), 308.0);
    }
}
