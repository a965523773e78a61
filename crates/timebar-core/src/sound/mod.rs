mod alert;
mod catalog;
mod player;

pub use {
    alert::AlertController,
    catalog::{AUDIO_EXTENSIONS, NO_SOUND_LABEL, SoundCatalog, SoundOption},
    player::{AlertPlayer, RodioPlayer},
};
