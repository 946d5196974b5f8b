//! content.rs
//! Everything on the card in one place.
//!
//! These constants are the whole editing surface: change the date, swap
//! the photos, rewrite the copy, and the rest of the app follows. No
//! other module hardcodes user-facing text.

use chrono::{DateTime, Local, TimeDelta, TimeZone};

/// The moment the card unlocks, as (year, month, day, hour, minute, second)
/// local time. `None` keeps rehearsal mode: the reveal lands 24 hours after
/// launch. An invalid or ambiguous date also falls back to launch + 24 h.
pub const TARGET_DATE: Option<(i32, u32, u32, u32, u32, u32)> = None;

pub fn target_instant(now: DateTime<Local>) -> DateTime<Local> {
    let fallback = now + TimeDelta::hours(24);

    match TARGET_DATE {
        Some((year, month, day, hour, minute, second)) => Local
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .unwrap_or(fallback),
        None => fallback,
    }
}

// Waiting screen

pub const WAITING_TITLE: &str = "Something special is coming...";
pub const SKIP_LABEL: &str = "Early Access";
pub const SKIP_HINT: &str = "Can't wait? Click above!";

// Photo gallery. Drop your own pictures into assets/photos/ and point the
// paths at them; a missing file shows as a framed placeholder instead.

pub struct Photo {
    pub path: &'static str,
    pub caption: &'static str,
}

pub const PHOTOS: &[Photo] = &[
    Photo {
        path: "assets/photos/first-date.jpg",
        caption: "Our first date",
    },
    Photo {
        path: "assets/photos/summer-vacation.jpg",
        caption: "Summer vacation",
    },
    Photo {
        path: "assets/photos/funny-face.jpg",
        caption: "That funny face",
    },
];

pub const GALLERY_TITLE: &str = "Our Beautiful Memories";

// Celebration hero

pub const HEADLINE: &str = "Happy Birthday!";
pub const SUBTITLE: &str =
    "\"To the world you may be one person; but to one person you may be the world.\"";
pub const SECRET_BUTTON_LABEL: &str = "Secret Message";

// Poem

pub const POEM_TITLE: &str = "A Poem For You";
pub const POEM_STANZAS: &[&str] = &[
    "\"In a world of millions,\n\
     It is you I see.\n\
     A guiding star,\n\
     Shining just for me.\"",
    "\"Your smile is the sunrise,\n\
     Your laugh, the sweetest tune.\n\
     I love you more than the stars,\n\
     And deeper than the moon.\"",
];
pub const POEM_SIGNOFF: &str = "Forever Yours";

// Letter

pub const LETTER_TITLE: &str = "My Letter To You";
pub const LETTER_BODY: &str = "My Dearest,\n\n\
    As you read this, I hope you realize how incredibly special you are to me. \
    Every day with you feels like a celebration. I built this little corner of \
    the internet just to show a fraction of the love I hold for you.\n\n\
    May this year bring you as much joy as you bring into my life.\n\n\
    Love always,\n\
    [Your Name]";

pub const FOOTER: &str = "Made with ❤️ for you";

// Secret message modal

pub const SECRET_TITLE: &str = "Shhh... It's a Secret";
pub const SECRET_BODY: &str = "\"If you are reading this, I have a little surprise \
    waiting for you. Check the pocket of my blue jacket... I think you'll like \
    what you find there!\"";
pub const SECRET_FOOTNOTE: &str = "(Tap anywhere outside to close)";

// Music player. Any format rodio's symphonia backend understands will do;
// if the file is missing the player falls back to a built-in melody.

pub const MUSIC_PATH: &str = "assets/music.mp3";
pub const MUSIC_TITLE: &str = "Background Music";
pub const MUSIC_SUBTITLE: &str = "Romantic Instrumental";

// Window titles

pub const WINDOW_TITLE_WAITING: &str = "Something special is coming...";
pub const WINDOW_TITLE_REVEALED: &str = "Happy Birthday!";
