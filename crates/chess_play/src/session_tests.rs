use super::*;
use chess_rules::Color;
use std::io::Cursor;

fn ascii() -> DisplayConfig {
    DisplayConfig {
        unicode: false,
        coordinates: true,
        highlight: true,
    }
}

fn run_script(display: &DisplayConfig, script: &str) -> (Controller, String) {
    let mut session = Session::new(display);
    let mut out = Vec::new();
    session.run(Cursor::new(script), &mut out).unwrap();
    (session.controller().clone(), String::from_utf8(out).unwrap())
}

#[test]
fn test_parse_commands() {
    let sq = |t: &str| parse_square(t).unwrap();
    assert_eq!(Command::parse("  "), None);
    assert_eq!(Command::parse("e2"), Some(Ok(Command::Click(sq("e2")))));
    assert_eq!(
        Command::parse("e2e4"),
        Some(Ok(Command::Play(Move::new(sq("e2"), sq("e4")))))
    );
    assert_eq!(Command::parse("MOVES"), Some(Ok(Command::Moves)));
    assert_eq!(
        Command::parse("save out.json"),
        Some(Ok(Command::Save("out.json".to_string())))
    );
    assert!(matches!(Command::parse("save"), Some(Err(_))));
    assert!(matches!(Command::parse("z9"), Some(Err(_))));
    assert!(matches!(Command::parse("e2 e4"), Some(Err(_))));
    assert_eq!(Command::parse("quit"), Some(Ok(Command::Quit)));
}

#[test]
fn test_fools_mate_session() {
    let (ctl, out) = run_script(&ascii(), "f2f3\ne7e5\ng2g4\nd8h4\ne2e4\nquit\n");
    assert!(ctl.game().is_checkmate());
    assert_eq!(ctl.game().winner(), Some(Color::Black));
    assert!(out.contains("Checkmate! Black wins."));
    assert!(out.contains("Game over. Checkmate! Black wins."));
    assert!(out.contains("The game is over."));
    assert_eq!(ctl.game().history().len(), 4);
}

#[test]
fn test_click_entry() {
    let (ctl, out) = run_script(&ascii(), "e2\ne4\n");
    assert_eq!(ctl.game().side_to_move(), Color::Black);
    assert_eq!(ctl.game().history().len(), 1);
    // the selection frame showed the two destinations
    assert!(out.contains("[P]"));
    assert!(out.contains("Black to move."));
}

#[test]
fn test_illegal_input_is_reported() {
    let (ctl, out) = run_script(&ascii(), "e2e5\ne7e5\nbogus\n");
    assert!(ctl.game().history().is_empty());
    assert!(out.contains("e2e5 is not a legal move"));
    assert!(out.contains("no piece of the side to move on e7"));
    assert!(out.contains("unknown command: bogus"));
}

#[test]
fn test_moves_lists_twenty_openings() {
    let (_, out) = run_script(&ascii(), "moves\n");
    let line = out
        .lines()
        .find(|l| l.contains("e2e4"))
        .expect("move list printed");
    assert_eq!(line.split_whitespace().count(), 20);
}

#[test]
fn test_new_game_resets() {
    let (ctl, out) = run_script(&ascii(), "e2e4\nnew\n");
    assert!(ctl.game().history().is_empty());
    assert_eq!(ctl.game().side_to_move(), Color::White);
    assert!(out.contains("New game."));
}

#[test]
fn test_quit_stops_reading() {
    let (ctl, _) = run_script(&ascii(), "quit\ne2e4\n");
    assert!(ctl.game().history().is_empty());
}

#[test]
fn test_save_writes_record() {
    let path = std::env::temp_dir().join(format!("chess_play_session_{}.json", std::process::id()));
    let script = format!("e2e4\ne7e5\nsave {}\n", path.display());
    let (_, out) = run_script(&ascii(), &script);
    assert!(out.contains("Saved to"));
    let record = GameRecord::load(&path).unwrap();
    assert_eq!(record.moves.len(), 2);
    assert_eq!(record.moves[0].notation, "e2e4");
    std::fs::remove_file(&path).ok();
}
