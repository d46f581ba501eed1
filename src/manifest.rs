//! The built-in deletion manifest.
//!
//! These lists were computed ahead of time by auditing the frontend for
//! asset references; filenames are carried verbatim, including the odd
//! spacing and casing the audit turned up. The tool never recomputes
//! usage, it only deletes what is listed here.

use std::path::{Path, PathBuf};

/// Default frontend root the asset directories hang off.
pub const DEFAULT_FRONTEND_DIR: &str = r"c:\dark-party\frontend";

/// Image directory, relative to the frontend root.
pub const IMAGES_SUBDIR: &str = "assets/images";

/// Icon directory, relative to the frontend root.
pub const ICONS_SUBDIR: &str = "assets/icons";

/// Images with no remaining references in the frontend code.
pub const UNUSED_IMAGES: &[&str] = &[
    "1.2M.png",
    "2.png",
    "22.png",
    "3.png",
    "33.png",
    "120k.png",
    "12k.png",
    "600k.png",
    "60k.png",
    "abouticon.png",
    "admin_seat.png",
    "agency_settings_background.png",
    "backlogo.jpeg",
    "baclogo.png",
    "banner_pic(1).png",
    "banner_pic(2).png",
    "below3.png",
    "bg_cp.png",
    "bg_id.png",
    "bg_mine.png",
    "boy.PNG",
    "checkIcon.png",
    "circle_lock.png",
    "CpBG.png",
    "cpleaderboard.png",
    "darkpartylogo.png",
    "dddf.PNG",
    "dollar.png",
    "editprofileicon.png",
    "exiticon.png",
    "fb.png",
    "feedbackicon.png",
    "gameleaderboard.png",
    "gifter.jpeg",
    "gifterbanner.jpeg",
    "gifterlist.png",
    "girl.PNG",
    "goliveicon.png",
    "google.jpeg",
    "heart.png",
    "image_border.png",
    "invite_img.png",
    "king_icon.png",
    "login_bg_pic.jpeg",
    "login_bg_pic.jpg",
    "logo.png",
    "lucky_profile.png",
    "lv0.png",
    "lv0_bg.png",
    "lv1.png",
    "lv10.png",
    "lv100.png",
    "lv100_bg.png",
    "lv10_bg.png",
    "lv1_bg.png",
    "lv20.png",
    "lv20_bg.png",
    "lv30.png",
    "lv30_bg.png",
    "lv40.png",
    "lv40_bg.png",
    "lv50.png",
    "lv50_bg.png",
    "lv60.png",
    "lv60_bg.png",
    "lv70.png",
    "lv70_bg.png",
    "lv80.png",
    "lv80_bg.png",
    "lv90.png",
    "lv90_bg.png",
    "message_icon.png",
    "mine_badge.png",
    "mine_earning.png",
    "mine_family.png",
    "mine_host.png",
    "mine_kf.png",
    "mine_level.png",
    "mine_vip.png",
    "myagencyicon.png",
    "newid.svg",
    "phone.png",
    "privacyicon.png",
    "sender_profile.png",
    "settingicon.png",
    "snapchat.png",
    "switchicon.png",
    "taskcentericon.png",
    "unnamed__6_-removebg-preview_1.png",
    "unnamed__7_-removebg-preview_1.png",
    "unnamed__7_-removebg-preview_2.png",
    "vipicon.png",
    "walletcoin.png",
    "yellow_seat.png",
];

/// Icons with no remaining references in the frontend code.
pub const UNUSED_ICONS: &[&str] = &[
    "4.png",
    "5.png",
    "6.png",
    "7.png",
    "8.png",
    "9.png",
    "10.png",
    "12.png",
    "13.png",
    "404.png",
    "505.png",
    "606.png",
    "707.png",
    "808.png",
    "diamond_exchange.png",
    "diamond_transfer.png",
    "diamond_withdraw.png",
    "Group_33.png",
    "pfp1.png",
    "pfp2.png",
    "Screenshot_2026-01-26_124352-removebg-preview_1.png",
    "Screenshot_2026-01-26_124437-removebg-preview_2.png",
    "Screenshot_2026-01-27_123551-removebg-preview_1.png",
    "Gemini_Generated_Image_bdsa8dbdsa8dbdsa-removebg-preview 1 (1).svg",
    "menu_1.svg",
    " confirm_follow.png",
    "follow.png",
    "chat.png",
    "Supporter_bronze.png",
    "supporter_Gold.png",
    "support_silver.png",
];

/// One directory paired with the filenames slated for deletion there.
#[derive(Debug, Clone)]
pub struct SweepTarget {
    /// Human-readable label used in progress output ("images", "icons").
    pub label: &'static str,

    /// Absolute directory the filenames are resolved against.
    pub dir: PathBuf,

    /// Filenames slated for deletion under `dir`.
    pub files: &'static [&'static str],
}

/// Builds the two sweep targets under the given frontend root.
#[must_use]
pub fn targets(frontend_dir: &Path) -> Vec<SweepTarget> {
    vec![
        SweepTarget {
            label: "images",
            dir: frontend_dir.join(IMAGES_SUBDIR),
            files: UNUSED_IMAGES,
        },
        SweepTarget {
            label: "icons",
            dir: frontend_dir.join(ICONS_SUBDIR),
            files: UNUSED_ICONS,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_resolve_under_root() {
        let root = Path::new("/tmp/frontend");
        let targets = targets(root);

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].label, "images");
        assert_eq!(targets[0].dir, root.join("assets/images"));
        assert_eq!(targets[1].label, "icons");
        assert_eq!(targets[1].dir, root.join("assets/icons"));
    }

    #[test]
    fn test_manifests_are_non_empty_and_distinct_per_target() {
        assert!(!UNUSED_IMAGES.is_empty());
        assert!(!UNUSED_ICONS.is_empty());

        // Bare filenames only; a path separator here would escape the
        // target directory.
        for name in UNUSED_IMAGES.iter().chain(UNUSED_ICONS) {
            assert!(!name.contains('/'), "manifest entry has a separator: {name}");
            assert!(!name.is_empty());
        }
    }

    #[test]
    fn test_no_duplicate_entries_within_a_list() {
        for list in [UNUSED_IMAGES, UNUSED_ICONS] {
            let mut sorted: Vec<&str> = list.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), list.len());
        }
    }
}
