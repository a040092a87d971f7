/// A production instance together with an optional replacement installed by tests.
///
/// All users go through [`InstanceSlot::get`], so installing a test instance redirects every
/// later access until it is removed again.
#[derive(Debug, Clone, Default)]
pub struct InstanceSlot<T> {
    production: T,
    test_instance: Option<T>,
}

impl<T> InstanceSlot<T> {
    pub fn new(production: T) -> Self {
        InstanceSlot { production, test_instance: None }
    }

    pub fn get(&self) -> &T {
        self.test_instance.as_ref().unwrap_or(&self.production)
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.test_instance.as_mut().unwrap_or(&mut self.production)
    }

    /// Install `instance` in place of the production instance, or restore the production
    /// instance with `None`. Returns the previously installed test instance.
    pub fn set_for_testing(&mut self, instance: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.test_instance, instance)
    }

    pub fn is_overridden(&self) -> bool {
        self.test_instance.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Natives {
        fn bar(&self, x: i32) -> i32;
    }

    struct Production;

    impl Natives for Production {
        fn bar(&self, x: i32) -> i32 {
            x + 1
        }
    }

    struct Mock(i32);

    impl Natives for Mock {
        fn bar(&self, _x: i32) -> i32 {
            self.0
        }
    }

    #[test]
    fn test_override_and_restore() {
        let mut slot: InstanceSlot<Box<dyn Natives>> = InstanceSlot::new(Box::new(Production));
        assert_eq!(slot.get().bar(1), 2);

        assert!(slot.set_for_testing(Some(Box::new(Mock(42)))).is_none());
        assert!(slot.is_overridden());
        assert_eq!(slot.get().bar(1), 42);

        let previous = slot.set_for_testing(None);
        assert_eq!(previous.map(|natives| natives.bar(0)), Some(42));
        assert_eq!(slot.get().bar(1), 2);
    }

    #[test]
    fn test_get_mut_targets_active_instance() {
        let mut slot = InstanceSlot::new(vec![1]);
        slot.set_for_testing(Some(vec![]));
        slot.get_mut().push(2);
        assert_eq!(slot.get(), &vec![2]);

        slot.set_for_testing(None);
        assert_eq!(slot.get(), &vec![1]);
    }
}
