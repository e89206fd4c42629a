use crate::ReminderContext;
use rand::{rngs::StdRng, Rng, SeedableRng};
use spike_reminder_domain::{Event, User};
use tracing::info;

const MINUTE: i64 = 1000 * 60;
const DEMO_SEED: u64 = 9;
const DEMO_USERS: usize = 2;
const DEMO_REMINDER_OFFSETS_MINUTES: [i64; 3] = [2, 4, 6];

/// Inserts the demo `User`s. Each one has a single `Event` starting in 7 to 9
/// minutes with `Reminder`s 2, 4 and 6 minutes from now.
pub async fn seed_demo_data(ctx: &ReminderContext) -> anyhow::Result<Vec<User>> {
    let now = ctx.sys.get_timestamp_millis();
    let mut rng = StdRng::seed_from_u64(DEMO_SEED);
    let mut users = Vec::with_capacity(DEMO_USERS);

    for i in 0..DEMO_USERS {
        let mut user = User::new(format!("User{}", i), "user@mymail.com");
        let minutes = rng.gen_range(7..10);
        let mut event = Event::new(format!("Event{}", i), now + minutes * MINUTE);
        for offset in DEMO_REMINDER_OFFSETS_MINUTES.iter() {
            event.add_reminder(now + offset * MINUTE, now);
        }
        user.add_event(event)?;
        ctx.repos.users.insert(&user).await?;
        users.push(user);
    }
    info!("Seeded {} demo users", users.len());

    Ok(users)
}
