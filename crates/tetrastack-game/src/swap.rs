//! Exchange operations between the queue and the reserve stack.
//!
//! Both operations exchange piece values in place: neither container's length
//! changes, and a failed precondition check leaves both containers untouched.

use std::mem;

use tetrastack_core::{Piece, PieceQueue, ReserveStack};

use crate::error::SwapError;

/// Number of pieces exchanged on each side by [`swap_block_three`].
pub const BLOCK_LEN: usize = 3;

/// Exchanges the queue's front piece with the reserve stack's top piece.
///
/// # Errors
///
/// Returns [`SwapError`] if either container is empty; nothing is mutated in
/// that case.
pub fn swap_front_top(queue: &mut PieceQueue, reserve: &mut ReserveStack) -> Result<(), SwapError> {
    if queue.is_empty() {
        return Err(SwapError::NotEnoughQueued {
            needed: 1,
            available: 0,
        });
    }
    if reserve.is_empty() {
        return Err(SwapError::NotEnoughReserved {
            needed: 1,
            available: 0,
        });
    }
    if let (Some(front), Some(top)) = (queue.front_mut(), reserve.top_mut()) {
        mem::swap(front, top);
    }
    Ok(())
}

/// Exchanges the queue's front three pieces with the reserve stack's three
/// pieces.
///
/// The queue's first three logical positions receive the former stack run in
/// top-to-base order. The stack's top three positions receive the former
/// queue run reversed: the new top is the back of the run, the new base its
/// front, so reading the stack top-to-base afterwards yields the queue's
/// former front three back-to-front. This ordering is a contract, not an
/// accident; see the tests below.
///
/// # Errors
///
/// Returns [`SwapError`] if either side holds fewer than [`BLOCK_LEN`]
/// pieces; nothing is mutated in that case.
pub fn swap_block_three(
    queue: &mut PieceQueue,
    reserve: &mut ReserveStack,
) -> Result<(), SwapError> {
    let Some(from_queue) = front_block(queue) else {
        return Err(SwapError::NotEnoughQueued {
            needed: BLOCK_LEN,
            available: queue.len(),
        });
    };
    let Some(from_reserve) = top_block(reserve) else {
        return Err(SwapError::NotEnoughReserved {
            needed: BLOCK_LEN,
            available: reserve.len(),
        });
    };

    for (offset, piece) in from_reserve.into_iter().enumerate() {
        if let Some(slot) = queue.get_mut(offset) {
            *slot = piece;
        }
    }
    // The new stack top takes the back of the captured queue run.
    for (offset, piece) in from_queue.into_iter().rev().enumerate() {
        if let Some(slot) = reserve.peek_from_top_mut(offset) {
            *slot = piece;
        }
    }
    Ok(())
}

fn front_block(queue: &PieceQueue) -> Option<[Piece; BLOCK_LEN]> {
    Some([*queue.get(0)?, *queue.get(1)?, *queue.get(2)?])
}

fn top_block(reserve: &ReserveStack) -> Option<[Piece; BLOCK_LEN]> {
    Some([
        *reserve.peek_from_top(0)?,
        *reserve.peek_from_top(1)?,
        *reserve.peek_from_top(2)?,
    ])
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tetrastack_core::{PieceId, PieceKind};

    use super::*;

    fn piece(id: u32) -> Piece {
        Piece::new(
            PieceKind::ALL[id as usize % PieceKind::ALL.len()],
            PieceId::new(id),
        )
    }

    fn queue_with(ids: &[u32]) -> PieceQueue {
        let mut queue = PieceQueue::new();
        for &id in ids {
            queue.enqueue(piece(id)).unwrap();
        }
        queue
    }

    fn reserve_with(ids: &[u32]) -> ReserveStack {
        let mut reserve = ReserveStack::new();
        for &id in ids {
            reserve.push(piece(id)).unwrap();
        }
        reserve
    }

    fn queue_ids(queue: &PieceQueue) -> Vec<u32> {
        queue.iter().map(|p| p.id().value()).collect()
    }

    fn reserve_ids(reserve: &ReserveStack) -> Vec<u32> {
        reserve.iter().map(|p| p.id().value()).collect()
    }

    #[test]
    fn test_swap_front_top_exchanges_in_place() {
        let mut queue = queue_with(&[0, 1, 2]);
        let mut reserve = reserve_with(&[10, 11]);

        swap_front_top(&mut queue, &mut reserve).unwrap();

        assert_eq!(queue_ids(&queue), vec![11, 1, 2]);
        assert_eq!(reserve_ids(&reserve), vec![0, 10]);
        assert_eq!(queue.len(), 3);
        assert_eq!(reserve.len(), 2);
    }

    #[test]
    fn test_swap_front_top_twice_is_identity() {
        let mut queue = queue_with(&[0, 1, 2]);
        let mut reserve = reserve_with(&[10, 11]);
        let queue_before = queue.clone();
        let reserve_before = reserve.clone();

        swap_front_top(&mut queue, &mut reserve).unwrap();
        swap_front_top(&mut queue, &mut reserve).unwrap();

        assert_eq!(queue, queue_before);
        assert_eq!(reserve, reserve_before);
    }

    #[test]
    fn test_swap_front_top_empty_reserve_leaves_queue_unchanged() {
        let mut queue = queue_with(&[0, 1]);
        let mut reserve = ReserveStack::new();
        let queue_before = queue.clone();

        let err = swap_front_top(&mut queue, &mut reserve).unwrap_err();

        assert_eq!(
            err,
            SwapError::NotEnoughReserved {
                needed: 1,
                available: 0
            }
        );
        assert_eq!(queue, queue_before);
        assert!(reserve.is_empty());
    }

    #[test]
    fn test_swap_front_top_empty_queue_leaves_reserve_unchanged() {
        let mut queue = PieceQueue::new();
        let mut reserve = reserve_with(&[10]);
        let reserve_before = reserve.clone();

        let err = swap_front_top(&mut queue, &mut reserve).unwrap_err();

        assert_eq!(
            err,
            SwapError::NotEnoughQueued {
                needed: 1,
                available: 0
            }
        );
        assert_eq!(reserve, reserve_before);
    }

    #[test]
    fn test_block_swap_ordering_contract() {
        // Queue front→back: A=0 B=1 C=2 (plus two more); reserve top→base:
        // X=12 Y=11 Z=10.
        let mut queue = queue_with(&[0, 1, 2, 3, 4]);
        let mut reserve = reserve_with(&[10, 11, 12]);

        swap_block_three(&mut queue, &mut reserve).unwrap();

        // Queue front three read the former stack top→base run.
        assert_eq!(queue_ids(&queue), vec![12, 11, 10, 3, 4]);
        // Stack top→base reads the former queue run back-to-front: the old
        // front piece sits at the base.
        assert_eq!(reserve_ids(&reserve), vec![2, 1, 0]);
    }

    #[test]
    fn test_block_swap_preserves_both_lengths() {
        let mut queue = queue_with(&[0, 1, 2, 3]);
        let mut reserve = reserve_with(&[10, 11, 12]);

        swap_block_three(&mut queue, &mut reserve).unwrap();

        assert_eq!(queue.len(), 4);
        assert_eq!(reserve.len(), 3);
    }

    #[test]
    fn test_block_swap_works_across_wrapped_storage() {
        // Wrap the queue's head past the physical end of the buffer before
        // swapping.
        let mut queue = queue_with(&[0, 1, 2, 3, 4]);
        for id in 5..9 {
            queue.dequeue().unwrap();
            queue.enqueue(piece(id)).unwrap();
        }
        assert_eq!(queue_ids(&queue), vec![4, 5, 6, 7, 8]);
        let mut reserve = reserve_with(&[10, 11, 12]);

        swap_block_three(&mut queue, &mut reserve).unwrap();

        assert_eq!(queue_ids(&queue), vec![12, 11, 10, 7, 8]);
        assert_eq!(reserve_ids(&reserve), vec![6, 5, 4]);
    }

    #[test]
    fn test_block_swap_short_queue_fails_without_mutation() {
        let mut queue = queue_with(&[0, 1]);
        let mut reserve = reserve_with(&[10, 11, 12]);
        let queue_before = queue.clone();
        let reserve_before = reserve.clone();

        let err = swap_block_three(&mut queue, &mut reserve).unwrap_err();

        assert_eq!(
            err,
            SwapError::NotEnoughQueued {
                needed: BLOCK_LEN,
                available: 2
            }
        );
        assert_eq!(queue, queue_before);
        assert_eq!(reserve, reserve_before);
    }

    #[test]
    fn test_block_swap_short_reserve_fails_without_mutation() {
        let mut queue = queue_with(&[0, 1, 2]);
        let mut reserve = reserve_with(&[10, 11]);
        let queue_before = queue.clone();
        let reserve_before = reserve.clone();

        let err = swap_block_three(&mut queue, &mut reserve).unwrap_err();

        assert_eq!(
            err,
            SwapError::NotEnoughReserved {
                needed: BLOCK_LEN,
                available: 2
            }
        );
        assert_eq!(queue, queue_before);
        assert_eq!(reserve, reserve_before);
    }

    proptest! {
        #[test]
        fn prop_swap_front_top_twice_restores_state(
            queue_len in 1..=5_u32,
            reserve_len in 1..=3_u32,
        ) {
            let queue_ids: Vec<_> = (0..queue_len).collect();
            let reserve_ids: Vec<_> = (10..10 + reserve_len).collect();
            let mut queue = queue_with(&queue_ids);
            let mut reserve = reserve_with(&reserve_ids);
            let queue_before = queue.clone();
            let reserve_before = reserve.clone();

            swap_front_top(&mut queue, &mut reserve).unwrap();
            swap_front_top(&mut queue, &mut reserve).unwrap();

            prop_assert_eq!(queue, queue_before);
            prop_assert_eq!(reserve, reserve_before);
        }

        #[test]
        fn prop_block_swap_never_changes_lengths(queue_len in 3..=5_u32) {
            let queue_ids: Vec<_> = (0..queue_len).collect();
            let mut queue = queue_with(&queue_ids);
            let mut reserve = reserve_with(&[10, 11, 12]);

            swap_block_three(&mut queue, &mut reserve).unwrap();

            prop_assert_eq!(queue.len(), queue_len as usize);
            prop_assert_eq!(reserve.len(), 3);
        }
    }
}
