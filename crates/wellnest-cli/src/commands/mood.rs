use chrono::NaiveDate;
use clap::Subcommand;
use wellnest_core::mood::{mood_streak, weekly_moods, DEFAULT_INTENSITY};
use wellnest_core::{Emotion, MoodLog, WellnessStore};

use super::{Context, StoreHandle};

#[derive(Subcommand)]
pub enum MoodAction {
    /// Log how you feel
    Log {
        /// Emotion name or emoji (e.g. happy, calm, 😴)
        emotion: Emotion,
        /// Intensity from 1 to 5
        #[arg(long, default_value_t = DEFAULT_INTENSITY)]
        intensity: u8,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
        /// Day of the log (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Weekly mood strip (Mon..Sun)
    Week,
    /// Consecutive days with a mood log
    Streak,
    /// Available emotions
    Emotions,
}

pub fn run(ctx: &Context, action: MoodAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        MoodAction::Log {
            emotion,
            intensity,
            notes,
            date,
        } => {
            let mut handle = StoreHandle::open(ctx)?;
            let log = MoodLog::new(emotion, intensity, notes, date.unwrap_or(ctx.today))?;
            handle.store.log_mood(log);
            handle.save()?;
            println!("Mood logged: {emotion} ({intensity}/5)");
        }
        MoodAction::Week => {
            let handle = StoreHandle::open(ctx)?;
            let week = weekly_moods(handle.store.mood_logs(), ctx.today);
            println!("{}", serde_json::to_string_pretty(&week)?);
        }
        MoodAction::Streak => {
            let handle = StoreHandle::open(ctx)?;
            println!("{}", mood_streak(handle.store.mood_logs(), ctx.today));
        }
        MoodAction::Emotions => {
            for emotion in Emotion::ALL {
                println!("{emotion}");
            }
        }
    }
    Ok(())
}
