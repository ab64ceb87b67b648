use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffles a slice deterministically for a (party rank, user) pair.
///
/// Every member of a contest rates the same pool of items, but each member
/// should see them in their own stable order: reloading the rating queue must
/// not reshuffle it, while two members should not share an order. The seed
/// mixes both ids with splitmix64-style odd constants so that neighboring ids
/// still produce unrelated permutations.
///
/// # Arguments
/// - `party_rank_id` - Contest the items belong to
/// - `user_id` - Member the queue is built for
/// - `items` - Slice to shuffle in place
pub fn shuffle_for_user<T>(party_rank_id: i32, user_id: i32, items: &mut [T]) {
    let seed = (party_rank_id as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (user_id as u64).wrapping_mul(0xD1B5_4A32_D192_ED03);

    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
}
