// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use inn_audit::Actor;

use crate::{OperatorContext, SYSTEM_OPERATOR_ID, get_audit_timeline};

use super::helpers::{add_room, create_test_property};

#[test]
fn test_operator_context_maps_to_operator_actor() {
    let actor: Actor = OperatorContext::new("frontdesk-7").to_audit_actor();

    assert_eq!(actor.id, "frontdesk-7");
    assert_eq!(actor.actor_type, "operator");
}

#[test]
fn test_blank_operator_falls_back_to_system() {
    let context = OperatorContext::new("  ");

    assert_eq!(context.id, SYSTEM_OPERATOR_ID);
    assert_eq!(context.to_audit_actor(), Actor::system());
}

#[test]
fn test_default_context_is_system() {
    assert_eq!(OperatorContext::default(), OperatorContext::system());
}

#[test]
fn test_operator_is_trimmed() {
    assert_eq!(OperatorContext::new(" op-1 ").id, "op-1");
}

#[test]
fn test_each_mutation_records_one_event() {
    let property = create_test_property();
    add_room(&property, "105");
    add_room(&property, "106");

    let timeline = get_audit_timeline(&property).unwrap();

    assert_eq!(timeline.events.len(), 2);
    assert!(timeline.events.iter().all(|e| e.actor_id == "frontdesk-1"));
}
