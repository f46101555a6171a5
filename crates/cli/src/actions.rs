//! The form-submission actions of the application: logging bodyweight,
//! following and unfollowing users and joining groups. Each one is a
//! single mutating request carrying the anti-forgery token.

use stronger_client::BodyweightRecord;
use stronger_client::GroupMembership;

use crate::cli::FollowArgs;
use crate::cli::JoinGroupArgs;
use crate::cli::LogBodyweightArgs;
use crate::cli::UnfollowArgs;
use crate::error::CliError;

pub(crate) fn log_bodyweight(args: LogBodyweightArgs) -> Result<(), CliError> {
    let api = args.api.client()?;

    let record = BodyweightRecord {
        bodyweight: args.bodyweight,
        date: args.date,
        user: args.user,
    };
    api.log_bodyweight(&record)?;

    println!(
        "Logged {bodyweight} kg for {date}.",
        bodyweight = args.bodyweight,
        date = args.date
    );

    Ok(())
}

pub(crate) fn follow(args: FollowArgs) -> Result<(), CliError> {
    let api = args.api.client()?;
    api.follow(args.user, args.friend)?;

    println!("User {user} now follows user {friend}.", user = args.user, friend = args.friend);

    Ok(())
}

pub(crate) fn unfollow(args: UnfollowArgs) -> Result<(), CliError> {
    let api = args.api.client()?;
    api.unfollow(args.friendship)?;

    println!("Friendship {id} was removed.", id = args.friendship);

    Ok(())
}

pub(crate) fn join_group(args: JoinGroupArgs) -> Result<(), CliError> {
    let api = args.api.client()?;

    let membership = GroupMembership {
        user: args.user,
        group: args.group.clone(),
        joined: args.joined,
    };
    api.join_group(&membership)?;

    println!("User {user} joined the `{group}` group.", user = args.user, group = args.group);

    Ok(())
}
