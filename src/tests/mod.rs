mod proptest_encode;
