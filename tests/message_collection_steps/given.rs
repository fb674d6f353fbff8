//! Given steps for message collection BDD scenarios.

use super::world::{CollectionWorld, message};
use rstest_bdd_macros::given;

#[given("an empty message collection")]
fn empty_collection(world: &mut CollectionWorld) {
    world.collection.delete_all();
}

#[given("a collection holding messages at 1001 and 1002")]
fn collection_with_two(world: &mut CollectionWorld) -> Result<(), eyre::Report> {
    world.collection.insert(message("original", "first", 1001)?);
    world.collection.insert(message("original", "second", 1002)?);
    Ok(())
}

#[given("another collection holding messages at 1003, 1001 and 1004")]
fn other_collection_with_three(world: &mut CollectionWorld) -> Result<(), eyre::Report> {
    world.other.insert(message("incoming", "third", 1003)?);
    world.other.insert(message("incoming", "first", 1001)?);
    world.other.insert(message("incoming", "fourth", 1004)?);
    Ok(())
}
