use memora_core::{BoardView, VisibleCell};

const INDICES: [&str; 10] = [
    "0️⃣", "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣",
];
const HIDDEN: &str = "🟩";
const CLEARED: &str = "⬛";

pub(crate) const INTRODUCTION: &str = "
Welcome to the memory game!
HOW TO PLAY:
1. Enter the size of the game you want. The board is a square of that size, 4 or 6 is a good start.
2. Enter the number of players, then each player's name.
3. The game rotates between the players. On your turn, enter two coordinates for a guess: the row \
first, then the column, using the indices along the sides. Enter only two numbers on the line. \
A space that has already been taken cannot be guessed.
4. If you do not find a match, the turn goes to the next player. If you do, those two spaces are \
cleared, your score is updated, and you get another turn.
5. The game ends when all matches have been found!
";

/// Draws the board with keycap indices along the top and left edges.
pub(crate) fn render_board(view: &BoardView) -> String {
    let mut out = String::from("   ");
    for col in 0..usize::from(view.size.get()) {
        out.push_str(INDICES[col]);
        out.push(' ');
    }

    for (row, cells) in view.rows().enumerate() {
        out.push('\n');
        out.push_str(INDICES[row]);
        out.push(' ');
        for cell in cells {
            out.push_str(match cell {
                VisibleCell::Hidden => HIDDEN,
                VisibleCell::Guessed(symbol) => symbol.as_str(),
                VisibleCell::Cleared(_) => CLEARED,
            });
            out.push(' ');
        }
    }
    out.push('\n');
    out
}
