use crate::deck::{Slide, Topic};

pub(super) const TOPIC: Topic = Topic {
    id: 6,
    name: "Mock Tests & Debugging",
    duration: "1 hour",
    slides: SLIDES,
};

const SLIDES: &[Slide] = &[
    Slide::Title {
        title: "Mock Tests & Debugging",
        subtitle: "Practice Problems & Debugging Techniques",
        description: "Test your knowledge and master debugging",
    },
    Slide::Content {
        title: "Problem-Solving Approach",
        points: &[
            "1. **Understand**: Read problem carefully, clarify doubts",
            "2. **Examples**: Work through examples, edge cases",
            "3. **Approach**: Choose data structure & algorithm",
            "4. **Pseudocode**: Write high-level solution",
            "5. **Code**: Implement with clean, readable code",
            "6. **Test**: Verify with multiple test cases",
            "7. **Optimize**: Analyze time/space complexity",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Common Patterns",
        points: &[
            "**Two Pointers**: Sorted arrays, palindromes",
            "**Sliding Window**: Subarray/substring problems",
            "**Fast & Slow Pointers**: Cycle detection",
            "**HashMap/Set**: Frequency counting, lookups",
            "**Stack**: Parentheses, next greater element",
            "**Queue**: BFS, level-order traversal",
            "**Recursion/Backtracking**: Permutations, combinations",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Mock Test - Problem 1",
        description: Some("Two Sum - HashMap approach"),
        code: r#"// Problem: Find two numbers that add up to target
// Return indices of the two numbers

function twoSum(nums, target) {
  const map = new Map();

  for (let i = 0; i < nums.length; i++) {
    const complement = target - nums[i];

    if (map.has(complement)) {
      return [map.get(complement), i];
    }

    map.set(nums[i], i);
  }

  return [];
}

// Test cases
console.log(twoSum([2, 7, 11, 15], 9));    // [0, 1]
console.log(twoSum([3, 2, 4], 6));         // [1, 2]
console.log(twoSum([3, 3], 6));            // [0, 1]

// Edge cases
console.log(twoSum([1], 2));               // []
console.log(twoSum([-1, -2, -3], -5));     // [1, 2]

// Time: O(n), Space: O(n)

// Analysis:
// ✓ Single pass through array
// ✓ HashMap for O(1) lookup
// ✓ Handles duplicates correctly
// ✓ Works with negative numbers"#,
    },
    Slide::Code {
        title: "Mock Test - Problem 2",
        description: Some("Valid Parentheses - Stack approach"),
        code: r#"// Problem: Check if parentheses string is valid
// Valid: (), [], {}, ([{}])
// Invalid: (], ([)]

function isValidParentheses(s) {
  const stack = [];
  const pairs = {
    ')': '(',
    ']': '[',
    '}': '{'
  };

  for (let char of s) {
    if (char === '(' || char === '[' || char === '{') {
      // Opening bracket
      stack.push(char);
    } else {
      // Closing bracket
      if (stack.length === 0) return false;
      if (stack.pop() !== pairs[char]) return false;
    }
  }

  return stack.length === 0;
}

// Test cases
console.log(isValidParentheses("()"));        // true
console.log(isValidParentheses("()[]{}"));    // true
console.log(isValidParentheses("(]"));        // false
console.log(isValidParentheses("([)]"));      // false
console.log(isValidParentheses("{[]}"));      // true

// Edge cases
console.log(isValidParentheses(""));          // true
console.log(isValidParentheses("("));         // false
console.log(isValidParentheses(")"));         // false

// Time: O(n), Space: O(n)"#,
    },
    Slide::Code {
        title: "Mock Test - Problem 3",
        description: Some("Reverse Linked List"),
        code: r#"// Problem: Reverse a singly linked list
// Input: 1 -> 2 -> 3 -> 4 -> 5
// Output: 5 -> 4 -> 3 -> 2 -> 1

// Iterative approach
function reverseList(head) {
  let prev = null;
  let current = head;

  while (current) {
    const next = current.next;
    current.next = prev;
    prev = current;
    current = next;
  }

  return prev;
}

// Recursive approach
function reverseListRecursive(head) {
  if (!head || !head.next) {
    return head;
  }

  const newHead = reverseListRecursive(head.next);
  head.next.next = head;
  head.next = null;

  return newHead;
}

// Test
const list = new LinkedList();
list.append(1);
list.append(2);
list.append(3);
list.append(4);
list.append(5);

const reversed = reverseList(list.head);
// Result: 5 -> 4 -> 3 -> 2 -> 1

// Time: O(n), Space: O(1) iterative, O(n) recursive"#,
    },
    Slide::Code {
        title: "Mock Test - Problem 4",
        description: Some("Binary Tree Level Order Traversal"),
        code: r#"// Problem: Return level-by-level values
// Input:     3
//          /   \
//         9    20
//             /  \
//            15   7
// Output: [[3], [9, 20], [15, 7]]

function levelOrder(root) {
  if (!root) return [];

  const result = [];
  const queue = [root];

  while (queue.length > 0) {
    const levelSize = queue.length;
    const currentLevel = [];

    for (let i = 0; i < levelSize; i++) {
      const node = queue.shift();
      currentLevel.push(node.value);

      if (node.left) queue.push(node.left);
      if (node.right) queue.push(node.right);
    }

    result.push(currentLevel);
  }

  return result;
}

// Test case
const root = new TreeNode(3);
root.left = new TreeNode(9);
root.right = new TreeNode(20);
root.right.left = new TreeNode(15);
root.right.right = new TreeNode(7);

console.log(levelOrder(root));
// Output: [[3], [9, 20], [15, 7]]

// Time: O(n), Space: O(n)"#,
    },
    Slide::Code {
        title: "Mock Test - Problem 5",
        description: Some("Maximum Subarray Sum (Kadane's Algorithm)"),
        code: r#"// Problem: Find contiguous subarray with largest sum
// Input: [-2,1,-3,4,-1,2,1,-5,4]
// Output: 6 (subarray [4,-1,2,1])

function maxSubArray(nums) {
  let maxSum = nums[0];
  let currentSum = nums[0];

  for (let i = 1; i < nums.length; i++) {
    // Either extend current subarray or start new
    currentSum = Math.max(nums[i], currentSum + nums[i]);
    maxSum = Math.max(maxSum, currentSum);
  }

  return maxSum;
}

// With subarray indices
function maxSubArrayWithIndices(nums) {
  let maxSum = nums[0];
  let currentSum = nums[0];
  let start = 0, end = 0, tempStart = 0;

  for (let i = 1; i < nums.length; i++) {
    if (currentSum + nums[i] < nums[i]) {
      currentSum = nums[i];
      tempStart = i;
    } else {
      currentSum += nums[i];
    }

    if (currentSum > maxSum) {
      maxSum = currentSum;
      start = tempStart;
      end = i;
    }
  }

  return {
    maxSum,
    subarray: nums.slice(start, end + 1)
  };
}

// Test cases
console.log(maxSubArray([-2,1,-3,4,-1,2,1,-5,4]));  // 6
console.log(maxSubArray([1]));                      // 1
console.log(maxSubArray([5,4,-1,7,8]));             // 23

// Time: O(n), Space: O(1)"#,
    },
    Slide::Code {
        title: "Mock Test - Problem 6",
        description: Some("Merge Intervals"),
        code: r#"// Problem: Merge overlapping intervals
// Input: [[1,3],[2,6],[8,10],[15,18]]
// Output: [[1,6],[8,10],[15,18]]

function mergeIntervals(intervals) {
  if (intervals.length <= 1) return intervals;

  // Sort by start time
  intervals.sort((a, b) => a[0] - b[0]);

  const merged = [intervals[0]];

  for (let i = 1; i < intervals.length; i++) {
    const current = intervals[i];
    const lastMerged = merged[merged.length - 1];

    if (current[0] <= lastMerged[1]) {
      // Overlapping, merge
      lastMerged[1] = Math.max(lastMerged[1], current[1]);
    } else {
      // Non-overlapping, add new interval
      merged.push(current);
    }
  }

  return merged;
}

// Test cases
console.log(mergeIntervals([[1,3],[2,6],[8,10],[15,18]]));
// Output: [[1,6],[8,10],[15,18]]

console.log(mergeIntervals([[1,4],[4,5]]));
// Output: [[1,5]]

console.log(mergeIntervals([[1,4],[0,4]]));
// Output: [[0,4]]

// Time: O(n log n), Space: O(n)"#,
    },
    Slide::Content {
        title: "Debugging Techniques",
        points: &[
            "**Console Logging**: Print variables at key points",
            "**Debugger**: Use browser/VSCode debugger",
            "**Rubber Duck**: Explain code to understand it",
            "**Edge Cases**: Test empty, single element, duplicates",
            "**Boundary Values**: Min/max values, overflow",
            "**Error Messages**: Read carefully, Google if needed",
            "**Simplify**: Break complex function into smaller parts",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Debugging Example",
        description: Some("Common mistakes and fixes"),
        code: r#"// Common Bug #1: Off-by-one errors
// Wrong:
for (let i = 0; i < arr.length - 1; i++) {  // Misses last element!
  console.log(arr[i]);
}

// Correct:
for (let i = 0; i < arr.length; i++) {
  console.log(arr[i]);
}

// Common Bug #2: Infinite loops
// Wrong:
let i = 0;
while (i < 10) {
  console.log(i);
  // Forgot to increment i!
}

// Correct:
let i = 0;
while (i < 10) {
  console.log(i);
  i++;
}

// Common Bug #3: Reference vs Value
// Wrong:
const original = [1, 2, 3];
const copy = original;  // Both point to same array!
copy.push(4);
console.log(original);  // [1, 2, 3, 4] - Modified!

// Correct:
const original = [1, 2, 3];
const copy = [...original];  // Create new array
copy.push(4);
console.log(original);  // [1, 2, 3] - Unchanged

// Common Bug #4: Async/Await
// Wrong:
function getData() {
  fetch('/api/data')
    .then(res => res.json())
    .then(data => {
      return data;  // This returns to Promise, not to caller!
    });
}

// Correct:
async function getData() {
  const res = await fetch('/api/data');
  const data = await res.json();
  return data;  // Now returns data properly
}"#,
    },
    Slide::Code {
        title: "Performance Debugging",
        description: Some("Identifying and fixing slow code"),
        code: r#"// Debugging Time Complexity
// Slow: O(n²) - Nested loops
function hasDuplicates(arr) {
  for (let i = 0; i < arr.length; i++) {
    for (let j = i + 1; j < arr.length; j++) {
      if (arr[i] === arr[j]) return true;
    }
  }
  return false;
}

// Fast: O(n) - Using Set
function hasDuplicatesFast(arr) {
  const seen = new Set();
  for (let num of arr) {
    if (seen.has(num)) return true;
    seen.add(num);
  }
  return false;
}

// Even faster: O(n)
function hasDuplicatesFastest(arr) {
  return new Set(arr).size !== arr.length;
}

// Benchmarking
console.time('Slow');
hasDuplicates(Array.from({length: 10000}, (_, i) => i));
console.timeEnd('Slow');  // ~100ms

console.time('Fast');
hasDuplicatesFast(Array.from({length: 10000}, (_, i) => i));
console.timeEnd('Fast');  // ~2ms

// Memory Debugging
console.log('Memory:', process.memoryUsage());

// Profile with Chrome DevTools:
// 1. Open DevTools -> Performance tab
// 2. Record profile
// 3. Analyze flame graph"#,
    },
    Slide::Content {
        title: "Testing Strategies",
        points: &[
            "**Unit Tests**: Test individual functions",
            "**Edge Cases**: Empty, null, single element",
            "**Boundary Values**: Max int, min int, overflow",
            "**Performance**: Large inputs, worst case",
            "**Negative Tests**: Invalid inputs, errors",
            "**Regression Tests**: Previously fixed bugs",
            "**Integration**: Multiple components together",
        ],
        diagram: false,
    },
    Slide::Code {
        title: "Writing Test Cases",
        description: Some("Comprehensive testing approach"),
        code: r#"// Example: Testing binary search
function binarySearch(arr, target) {
  let left = 0, right = arr.length - 1;

  while (left <= right) {
    const mid = Math.floor((left + right) / 2);
    if (arr[mid] === target) return mid;
    if (arr[mid] < target) left = mid + 1;
    else right = mid - 1;
  }

  return -1;
}

// Test Suite
function testBinarySearch() {
  // Normal cases
  console.assert(binarySearch([1,2,3,4,5], 3) === 2, "Find middle");
  console.assert(binarySearch([1,2,3,4,5], 1) === 0, "Find first");
  console.assert(binarySearch([1,2,3,4,5], 5) === 4, "Find last");

  // Edge cases
  console.assert(binarySearch([], 1) === -1, "Empty array");
  console.assert(binarySearch([1], 1) === 0, "Single element found");
  console.assert(binarySearch([1], 2) === -1, "Single element not found");

  // Not found
  console.assert(binarySearch([1,2,3,4,5], 6) === -1, "Larger than max");
  console.assert(binarySearch([1,2,3,4,5], 0) === -1, "Smaller than min");

  // Duplicates
  console.assert(binarySearch([1,2,2,2,3], 2) >= 1 &&
                 binarySearch([1,2,2,2,3], 2) <= 3, "Find duplicate");

  // Large array
  const large = Array.from({length: 1000000}, (_, i) => i);
  console.assert(binarySearch(large, 500000) === 500000, "Large array");

  console.log("All tests passed!");
}

testBinarySearch();"#,
    },
    Slide::Content {
        title: "Interview Tips",
        points: &[
            "1. **Communicate**: Think out loud, explain approach",
            "2. **Ask Questions**: Clarify requirements, constraints",
            "3. **Start Simple**: Brute force first, then optimize",
            "4. **Test as You Go**: Verify logic with examples",
            "5. **Time/Space Analysis**: State complexity",
            "6. **Handle Edge Cases**: Don't assume perfect input",
            "7. **Clean Code**: Readable variable names, comments",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Final Practice Problems",
        points: &[
            "1. Implement LRU Cache",
            "2. Serialize and deserialize binary tree",
            "3. Find median of two sorted arrays",
            "4. Trapping rain water problem",
            "5. Regular expression matching",
            "6. Longest palindromic substring",
            "7. Design Twitter/Instagram feed",
        ],
        diagram: false,
    },
    Slide::Content {
        title: "Resources & Next Steps",
        points: &[
            "**Practice Sites**: LeetCode, HackerRank, CodeSignal",
            "**Books**: Cracking the Coding Interview, CTCI",
            "**Visualizers**: VisuAlgo, Algorithm Visualizer",
            "**Communities**: Reddit r/cscareerquestions, Discord",
            "**Mock Interviews**: Pramp, interviewing.io",
            "**System Design**: Educative.io, Grokking series",
            "**Keep Coding**: Consistency is key! 🚀",
        ],
        diagram: false,
    },
];
