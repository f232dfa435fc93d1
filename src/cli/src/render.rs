use owo_colors::OwoColorize;
use rubik_core::{Color, Cube, FaceGrid, Side};

/// Blank space standing in for one face in the top and bottom bands of the net.
const FACE_GAP: &str = "      ";

fn sticker(color: Color, colored: bool) -> String {
    if !colored {
        return format!("{} ", color.letter());
    }

    let (r, g, b) = match color {
        Color::Red => (255, 0, 0),
        Color::Blue => (0, 0, 255),
        Color::Green => (0, 255, 0),
        Color::White => (255, 255, 255),
        Color::Yellow => (255, 255, 0),
        Color::Orange => (255, 128, 0),
    };

    format!("{}", "██".truecolor(r, g, b))
}

fn row(grid: &FaceGrid, row: usize, colored: bool) -> String {
    grid[row]
        .iter()
        .map(|&color| sticker(color, colored))
        .collect()
}

/// Draws the unfolded cube: Up above Front, then Left, Front, Right and Back
/// side by side, then Down below Front. Without `colored`, each sticker is its
/// color letter.
pub fn render_net(cube: &Cube, colored: bool) -> String {
    let banded = |side: Side| {
        let grid = cube.face(side);

        (0..3)
            .map(|r| format!("{FACE_GAP}{}\n", row(&grid, r, colored).trim_end()))
            .collect::<String>()
    };

    let middle = [Side::Left, Side::Front, Side::Right, Side::Back].map(|side| cube.face(side));
    let middle_band = (0..3)
        .map(|r| {
            let line: String = middle.iter().map(|grid| row(grid, r, colored)).collect();
            format!("{}\n", line.trim_end())
        })
        .collect::<String>();

    banded(Side::Up) + &middle_band + &banded(Side::Down)
}
