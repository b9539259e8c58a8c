//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use sleeper_ffl::{
    cli::{Commands, GetCmd, Sleeper},
    commands::{
        highest_scorers::handle_highest_scorers,
        league_data::handle_league_data,
        trending::{handle_trending_availability, TrendingParams},
        update_players::handle_update_players,
        user_data::handle_user_data,
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Sleeper::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::UserData {
                user,
                season,
                json,
                refresh,
            } => handle_user_data(user, season, json, refresh).await?,

            GetCmd::LeagueData {
                league_id,
                json,
                refresh,
                verbose,
            } => handle_league_data(league_id, json, refresh, verbose).await?,

            GetCmd::TrendingAvailability {
                user_id,
                season,
                direction,
                lookback_hours,
                limit,
                json,
                refresh,
                verbose,
            } => {
                handle_trending_availability(TrendingParams {
                    user_id,
                    season,
                    direction,
                    lookback_hours,
                    limit,
                    as_json: json,
                    refresh,
                    verbose,
                })
                .await?
            }

            GetCmd::HighestScorers {
                league_id,
                week,
                depth,
                json,
                refresh,
            } => handle_highest_scorers(league_id, week, depth, json, refresh).await?,

            GetCmd::UpdatePlayers { force } => handle_update_players(force).await?,
        },
    }

    Ok(())
}
