//! Then steps for message collection BDD scenarios.

use super::world::CollectionWorld;
use eyre::eyre;
use message_log::message::{domain::Message, error::ErrorKind};
use rstest_bdd_macros::then;

#[then("the collection holds {count:u64} messages")]
fn collection_holds(world: &CollectionWorld, count: u64) -> Result<(), eyre::Report> {
    let len = u64::try_from(world.collection.len())?;
    if len != count {
        return Err(eyre!("expected {count} messages, found {len}"));
    }
    Ok(())
}

#[then("the other collection still holds {count:u64} messages")]
fn other_collection_holds(world: &CollectionWorld, count: u64) -> Result<(), eyre::Report> {
    let len = u64::try_from(world.other.len())?;
    if len != count {
        return Err(eyre!("expected merge source to keep {count} messages, found {len}"));
    }
    Ok(())
}

#[then("the rendered collection lists the four messages in timestamp order")]
fn rendered_in_order(world: &CollectionWorld) -> Result<(), eyre::Report> {
    let expected = "User1: Message1 (sent at 1)\n\
                    User2: Message2 (sent at 2)\n\
                    User1: Message3 (sent at 3)\n\
                    User1: Message4 (sent at 4)\n";
    let rendered = world.collection.render_all();
    if rendered != expected {
        return Err(eyre!("unexpected rendering:\n{rendered}"));
    }
    Ok(())
}

#[then("the last message landed at position {index:u64}")]
fn last_index_is(world: &CollectionWorld, index: u64) -> Result<(), eyre::Report> {
    let last = world
        .last_index
        .ok_or_else(|| eyre!("no message was inserted in this scenario"))?;
    if u64::try_from(last)? != index {
        return Err(eyre!("expected insertion at {index}, got {last}"));
    }
    Ok(())
}

#[then(r#"the message at position {index:u64} is from "{sender}""#)]
fn message_at_is_from(
    world: &CollectionWorld,
    index: u64,
    sender: String,
) -> Result<(), eyre::Report> {
    let found = world.collection.at(usize::try_from(index)?)?;
    if found.sender() != sender {
        return Err(eyre!(
            "expected sender {sender} at {index}, found {}",
            found.sender()
        ));
    }
    Ok(())
}

#[then("the original message at 1001 precedes the merged message at 1001")]
fn original_precedes_merged(world: &CollectionWorld) -> Result<(), eyre::Report> {
    let senders: Vec<_> = world
        .collection
        .iter()
        .filter(|message| message.timestamp().value() == 1001)
        .map(Message::sender)
        .collect();
    if senders != ["original", "incoming"] {
        return Err(eyre!("unexpected tie order at 1001: {senders:?}"));
    }

    let timestamps: Vec<_> = world.collection.iter().map(Message::timestamp).collect();
    if !timestamps.is_sorted() {
        return Err(eyre!("merged collection is not sorted: {timestamps:?}"));
    }
    Ok(())
}

#[then("{count:u64} messages were deleted")]
fn messages_deleted(world: &CollectionWorld, count: u64) -> Result<(), eyre::Report> {
    let removed = world
        .last_removed
        .ok_or_else(|| eyre!("no deletion was performed in this scenario"))?;
    if u64::try_from(removed)? != count {
        return Err(eyre!("expected {count} deletions, got {removed}"));
    }
    Ok(())
}

#[then(r#"the remaining messages read "{first}" then "{second}""#)]
fn remaining_messages(
    world: &CollectionWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let texts: Vec<_> = world.collection.iter().map(Message::text).collect();
    if texts != [first.as_str(), second.as_str()] {
        return Err(eyre!("unexpected survivors: {texts:?}"));
    }
    Ok(())
}

#[then("creation fails with an invalid argument error")]
fn creation_fails(world: &CollectionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_creation
        .as_ref()
        .ok_or_else(|| eyre!("no message construction was attempted"))?;
    match result {
        Err(err) if err.kind() == ErrorKind::InvalidArgument => Ok(()),
        other => Err(eyre!("expected invalid argument error, got {other:?}")),
    }
}

#[then("the lookup fails with an index out of range error")]
fn lookup_fails(world: &CollectionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_lookup
        .as_ref()
        .ok_or_else(|| eyre!("no lookup was attempted"))?;
    match result {
        Err(err) if err.kind() == ErrorKind::IndexOutOfRange => Ok(()),
        other => Err(eyre!("expected index out of range error, got {other:?}")),
    }
}
