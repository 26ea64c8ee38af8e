//! Slice helpers: rotation and negated filtering.

/// Extension trait for slices of cloneable elements.
pub trait SliceExt<T> {
    /// Rotation by one position; see [`SliceExt::shifted_by`].
    fn shifted(&self) -> Vec<T>;

    /// Returns a new vector with the first `distance` elements moved to the
    /// end, or for a negative distance the last `|distance|` elements moved
    /// to the front.
    ///
    /// When `|distance|` exceeds the length the elements are not shifted.
    ///
    /// ```
    /// use base_type_extensions::SliceExt;
    ///
    /// assert_eq!([1, 2, 3, 4].shifted_by(1), vec![2, 3, 4, 1]);
    /// assert_eq!([1, 2, 3, 4].shifted_by(-1), vec![4, 1, 2, 3]);
    /// assert_eq!([1, 2, 3, 4].shifted_by(5), vec![1, 2, 3, 4]);
    /// ```
    fn shifted_by(&self, distance: isize) -> Vec<T>;

    /// Keeps the elements whose boolean `field` is `false`.
    ///
    /// ```
    /// use base_type_extensions::SliceExt;
    ///
    /// #[derive(Clone)]
    /// struct Person { is_active: bool, name: &'static str }
    ///
    /// let people = [
    ///     Person { is_active: true, name: "Alice" },
    ///     Person { is_active: false, name: "Bob" },
    /// ];
    /// let inactive = people.filter_not(|p| p.is_active);
    /// assert_eq!(inactive.len(), 1);
    /// assert_eq!(inactive[0].name, "Bob");
    /// ```
    fn filter_not<F>(&self, field: F) -> Vec<T>
    where
        F: Fn(&T) -> bool;
}

impl<T: Clone> SliceExt<T> for [T] {
    fn shifted(&self) -> Vec<T> {
        self.shifted_by(1)
    }

    fn shifted_by(&self, distance: isize) -> Vec<T> {
        let len = self.len();
        let magnitude = distance.unsigned_abs();
        if magnitude > len {
            return self.to_vec();
        }

        let split = if distance >= 0 { magnitude } else { len - magnitude };
        let (head, tail) = self.split_at(split);
        let mut shifted = Vec::with_capacity(len);
        shifted.extend_from_slice(tail);
        shifted.extend_from_slice(head);
        shifted
    }

    fn filter_not<F>(&self, field: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.iter().filter(|item| !field(*item)).cloned().collect()
    }
}
