use crate::domain::model::Groupings;

/// Numbers each department's groups 1, 2, 3, … in grouping order and
/// copies the slot onto every member. Slots restart in each department.
pub fn assign_slots(groupings: &mut Groupings) {
    for department in groupings.departments_mut() {
        for (slot, group) in (1u32..).zip(department.groups.iter_mut()) {
            group.time_slot = Some(slot);
            for student in &mut group.students {
                student.time_slot = Some(slot);
            }
        }
        tracing::debug!(
            "Assigned {} slots in {}",
            department.groups.len(),
            department.department
        );
    }
}
