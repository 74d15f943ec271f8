//! Priority buckets for the task list.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use super::{Priority, Task};

/// Tasks partitioned by priority.
///
/// Iteration always runs high, medium, low. A priority without tasks has no
/// bucket at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityGroups<'a> {
    buckets: BTreeMap<Priority, Vec<&'a Task>>,
}

impl<'a> PriorityGroups<'a> {
    pub fn get(&self, priority: Priority) -> Option<&[&'a Task]> {
        self.buckets.get(&priority).map(Vec::as_slice)
    }

    pub fn contains(&self, priority: Priority) -> bool {
        self.buckets.contains_key(&priority)
    }

    /// Non-empty sections in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Priority, &[&'a Task])> + '_ {
        self.buckets
            .iter()
            .map(|(priority, tasks)| (*priority, tasks.as_slice()))
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Flatten back into display order.
    pub fn ordered(&self) -> Vec<&'a Task> {
        self.buckets.values().flatten().copied().collect()
    }
}

impl Serialize for PriorityGroups<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (priority, tasks) in &self.buckets {
            map.serialize_entry(priority.as_str(), tasks)?;
        }
        map.end()
    }
}

/// Partition `tasks` by priority, keeping their relative order.
pub fn group_by_priority(tasks: &[Task]) -> PriorityGroups<'_> {
    let mut buckets: BTreeMap<Priority, Vec<&Task>> = BTreeMap::new();
    for task in tasks {
        buckets.entry(task.priority).or_default().push(task);
    }
    PriorityGroups { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    fn task(id: TaskId, priority: Priority) -> Task {
        Task {
            id,
            title: format!("task{id}"),
            description: String::new(),
            due_date: None,
            due_time: None,
            priority,
            category: "Work".to_string(),
            completed: false,
        }
    }

    fn ids(tasks: &[&Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn groups_preserve_relative_order() {
        let tasks = vec![
            task(1, Priority::High),
            task(2, Priority::Low),
            task(3, Priority::High),
            task(4, Priority::Medium),
        ];
        let groups = group_by_priority(&tasks);

        assert_eq!(ids(groups.get(Priority::High).unwrap()), vec![1, 3]);
        assert_eq!(ids(groups.get(Priority::Medium).unwrap()), vec![4]);
        assert_eq!(ids(groups.get(Priority::Low).unwrap()), vec![2]);
        assert_eq!(ids(&groups.ordered()), vec![1, 3, 4, 2]);
    }

    #[test]
    fn sections_follow_display_order_regardless_of_input() {
        let tasks = vec![
            task(1, Priority::Low),
            task(2, Priority::Medium),
            task(3, Priority::High),
        ];
        let order: Vec<Priority> = group_by_priority(&tasks).iter().map(|(p, _)| p).collect();
        assert_eq!(order, Priority::DISPLAY_ORDER.to_vec());
    }

    #[test]
    fn missing_priority_is_absent_not_empty() {
        let tasks = vec![task(1, Priority::High), task(2, Priority::Low)];
        let groups = group_by_priority(&tasks);
        assert_eq!(groups.len(), 2);
        assert!(!groups.contains(Priority::Medium));
        assert!(groups.get(Priority::Medium).is_none());

        assert!(group_by_priority(&[]).is_empty());
    }

    #[test]
    fn serializes_as_ordered_map() {
        let tasks = vec![task(1, Priority::Low), task(2, Priority::High)];
        let json = serde_json::to_value(group_by_priority(&tasks)).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(json["high"][0]["id"], 2);
        assert_eq!(json["low"][0]["id"], 1);
    }
}
