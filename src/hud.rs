/// Terminal status readout.  All terminal output lives here.
///
/// Shows the numbers the level exposes (score, health, timers, status).
/// The world itself is not drawn.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use side_scroller::entities::GameStatus;
use side_scroller::level::Level;
use side_scroller::player::PlayerState;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Cyan;
const C_SCORE: Color = Color::Yellow;
const C_HEALTH: Color = Color::Green;
const C_BOSS: Color = Color::Red;
const C_POWER: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;
const C_WON: Color = Color::Green;
const C_LOST: Color = Color::Red;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one frame of the status screen.
pub fn render<W: Write>(out: &mut W, level: &Level, status: GameStatus) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    line(out, 0, C_TITLE, "SIDE SCROLLER")?;
    line(out, 2, C_SCORE, &format!("Score   {:>6}", level.score()))?;
    line(
        out,
        3,
        C_HEALTH,
        &format!("Health  {:>6}", level.player_health_display()),
    )?;
    if let Some(boss) = level.boss_health_display() {
        line(out, 4, C_BOSS, &format!("Boss    {:>6}", boss))?;
    }

    draw_power_ups(out, level)?;

    let state = match level.player.state() {
        PlayerState::Grounded => "grounded",
        PlayerState::Jumping => "airborne",
        PlayerState::Dying => "down",
    };
    line(
        out,
        8,
        C_HINT,
        &format!("Player  {state:<9} frame {}", level.frame),
    )?;
    line(
        out,
        10,
        C_HINT,
        "← → / A D : Move   ↑ W SPACE : Jump   S : Throw   Q : Quit",
    )?;

    match status {
        GameStatus::Won => line(out, 12, C_WON, "LEVEL COMPLETE, press any key")?,
        GameStatus::GameOver => line(out, 12, C_LOST, "GAME OVER, press any key")?,
        GameStatus::Playing => {}
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn draw_power_ups<W: Write>(out: &mut W, level: &Level) -> std::io::Result<()> {
    let player = &level.player;
    let mut tags = Vec::new();
    if player.is_invincibility_active() {
        tags.push(format!("INVINCIBLE {:>4}", player.invincibility_timer));
    }
    if player.double_score_active() {
        tags.push(format!(
            "x2 SCORE {:>4} ({} stacked)",
            player.double_score_timer, player.active_double_scores
        ));
    }
    if !tags.is_empty() {
        line(out, 6, C_POWER, &tags.join("   "))?;
    }
    Ok(())
}

fn line<W: Write>(out: &mut W, row: u16, color: Color, text: &str) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}
