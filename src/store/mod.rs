//! Entity Stores
//!
//! One store per business entity, all built by the generic factory; plus
//! the explicitly-constructed container provided to the UI tree via context.

mod factory;
pub mod session;

pub use factory::{ApiFuture, EntityApi, EntityStore};

use gymdesk_core::models::{
    Employee, Exercise, GymClass, Membership, Payment, Routine, Workout,
};
use gymdesk_core::Params;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

pub type ExerciseStore = EntityStore<Exercise, api::exercises::ExercisePayload>;
pub type RoutineStore = EntityStore<Routine, api::routines::RoutinePayload>;
pub type WorkoutStore = EntityStore<Workout, api::workouts::WorkoutPayload>;
pub type EmployeeStore = EntityStore<Employee, api::employees::EmployeePayload>;
pub type PaymentStore = EntityStore<Payment, api::payments::PaymentPayload>;
pub type ClassStore = EntityStore<GymClass, api::classes::ClassPayload>;
pub type MembershipStore = EntityStore<Membership, api::memberships::MembershipPayload>;

fn default_list_filters() -> Params {
    Params::from([
        ("page".to_string(), "1".to_string()),
        ("limit".to_string(), "10".to_string()),
    ])
}

fn exercise_store() -> ExerciseStore {
    EntityStore::new(
        "gymdesk.filters.exercises",
        default_list_filters,
        EntityApi {
            list: |params| Box::pin(api::exercises::list(params)),
            get: |id| Box::pin(api::exercises::get(id)),
            create: |payload| Box::pin(api::exercises::create(payload)),
            update: |id, payload| Box::pin(api::exercises::update(id, payload)),
            delete: |id| Box::pin(api::exercises::delete(id)),
            toggle_status: Some(|id| Box::pin(api::exercises::toggle_status(id))),
        },
    )
}

fn routine_store() -> RoutineStore {
    EntityStore::new(
        "gymdesk.filters.routines",
        default_list_filters,
        EntityApi {
            list: |params| Box::pin(api::routines::list(params)),
            get: |id| Box::pin(api::routines::get(id)),
            create: |payload| Box::pin(api::routines::create(payload)),
            update: |id, payload| Box::pin(api::routines::update(id, payload)),
            delete: |id| Box::pin(api::routines::delete(id)),
            toggle_status: None,
        },
    )
}

fn workout_store() -> WorkoutStore {
    EntityStore::new(
        "gymdesk.filters.workouts",
        default_list_filters,
        EntityApi {
            list: |params| Box::pin(api::workouts::list(params)),
            get: |id| Box::pin(api::workouts::get(id)),
            create: |payload| Box::pin(api::workouts::create(payload)),
            update: |id, payload| Box::pin(api::workouts::update(id, payload)),
            delete: |id| Box::pin(api::workouts::delete(id)),
            toggle_status: None,
        },
    )
}

fn employee_store() -> EmployeeStore {
    EntityStore::new(
        "gymdesk.filters.employees",
        default_list_filters,
        EntityApi {
            list: |params| Box::pin(api::employees::list(params)),
            get: |id| Box::pin(api::employees::get(id)),
            create: |payload| Box::pin(api::employees::create(payload)),
            update: |id, payload| Box::pin(api::employees::update(id, payload)),
            delete: |id| Box::pin(api::employees::delete(id)),
            toggle_status: Some(|id| Box::pin(api::employees::toggle_status(id))),
        },
    )
}

fn payment_store() -> PaymentStore {
    EntityStore::new(
        "gymdesk.filters.payments",
        default_list_filters,
        EntityApi {
            list: |params| Box::pin(api::payments::list(params)),
            get: |id| Box::pin(api::payments::get(id)),
            create: |payload| Box::pin(api::payments::create(payload)),
            update: |id, payload| Box::pin(api::payments::update(id, payload)),
            delete: |id| Box::pin(api::payments::delete(id)),
            toggle_status: None,
        },
    )
}

fn class_store() -> ClassStore {
    EntityStore::new(
        "gymdesk.filters.classes",
        default_list_filters,
        EntityApi {
            list: |params| Box::pin(api::classes::list(params)),
            get: |id| Box::pin(api::classes::get(id)),
            create: |payload| Box::pin(api::classes::create(payload)),
            update: |id, payload| Box::pin(api::classes::update(id, payload)),
            delete: |id| Box::pin(api::classes::delete(id)),
            toggle_status: Some(|id| Box::pin(api::classes::toggle_status(id))),
        },
    )
}

fn membership_store() -> MembershipStore {
    EntityStore::new(
        "gymdesk.filters.memberships",
        default_list_filters,
        EntityApi {
            list: |params| Box::pin(api::memberships::list(params)),
            get: |id| Box::pin(api::memberships::get(id)),
            create: |payload| Box::pin(api::memberships::create(payload)),
            update: |id, payload| Box::pin(api::memberships::update(id, payload)),
            delete: |id| Box::pin(api::memberships::delete(id)),
            toggle_status: Some(|id| Box::pin(api::memberships::toggle_status(id))),
        },
    )
}

/// Explicitly-constructed container for every entity store, provided to the
/// UI tree via context instead of module-level singletons.
#[derive(Clone, Copy)]
pub struct AppStores {
    pub exercises: ExerciseStore,
    pub routines: RoutineStore,
    pub workouts: WorkoutStore,
    pub employees: EmployeeStore,
    pub payments: PaymentStore,
    pub classes: ClassStore,
    pub memberships: MembershipStore,
}

impl AppStores {
    pub fn new() -> Self {
        Self {
            exercises: exercise_store(),
            routines: routine_store(),
            workouts: workout_store(),
            employees: employee_store(),
            payments: payment_store(),
            classes: class_store(),
            memberships: membership_store(),
        }
    }

    /// Restore persisted filter slices and re-trigger the initial fetches.
    /// Collections themselves are never persisted.
    pub fn init(&self) {
        self.exercises.rehydrate();
        self.routines.rehydrate();
        self.workouts.rehydrate();
        self.employees.rehydrate();
        self.payments.rehydrate();
        self.classes.rehydrate();
        self.memberships.rehydrate();

        let stores = *self;
        spawn_local(async move { stores.exercises.list().await });
        let stores = *self;
        spawn_local(async move { stores.routines.list().await });
        let stores = *self;
        spawn_local(async move { stores.workouts.list().await });
        let stores = *self;
        spawn_local(async move { stores.employees.list().await });
        let stores = *self;
        spawn_local(async move { stores.payments.list().await });
        let stores = *self;
        spawn_local(async move { stores.classes.list().await });
        let stores = *self;
        spawn_local(async move { stores.memberships.list().await });
    }

    /// Drop every local collection (logout).
    pub fn dispose(&self) {
        self.exercises.dispose();
        self.routines.dispose();
        self.workouts.dispose();
        self.employees.dispose();
        self.payments.dispose();
        self.classes.dispose();
        self.memberships.dispose();
    }
}

impl Default for AppStores {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the store container from context.
pub fn use_stores() -> AppStores {
    expect_context::<AppStores>()
}
