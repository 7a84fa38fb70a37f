use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Terminal palette for the timeline and report output.
pub struct Palette;

impl Palette {
    pub fn default_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Palette::FG);
        skin.bold.set_fg(Palette::FG);

        skin.headers[0].set_fg(Palette::BLUE);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Palette::YELLOW);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.bullet.set_fg(Palette::RED);
        skin.inline_code.set_fg(Palette::GREEN);
        skin.inline_code.set_bg(Palette::BG);

        skin
    }

    pub const BG: Color = Color::Rgb {
        r: 0x28,
        g: 0x2C,
        b: 0x34,
    }; // #282C34
    pub const FG: Color = Color::Rgb {
        r: 0xAB,
        g: 0xB2,
        b: 0xBF,
    }; // #ABB2BF
    pub const RED: Color = Color::Rgb {
        r: 0xE0,
        g: 0x6C,
        b: 0x75,
    }; // #E06C75
    pub const YELLOW: Color = Color::Rgb {
        r: 0xE5,
        g: 0xC0,
        b: 0x7B,
    }; // #E5C07B
    pub const GREEN: Color = Color::Rgb {
        r: 0x98,
        g: 0xC3,
        b: 0x79,
    }; // #98C379
    pub const BLUE: Color = Color::Rgb {
        r: 0x61,
        g: 0xAF,
        b: 0xEF,
    }; // #61AFEF
}
